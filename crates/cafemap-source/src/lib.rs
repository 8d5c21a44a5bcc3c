pub mod bundled;
pub mod error;
mod io;
mod mapper;
mod schema;

pub use bundled::bundled_records;
pub use error::{Error, Result};
pub use io::{records_from_path, records_from_reader, records_from_url};
pub use mapper::map_rows;
pub use schema::RawCafeRow;
