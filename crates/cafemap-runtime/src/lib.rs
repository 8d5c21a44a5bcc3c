pub mod config;
pub mod error;
mod loader;
mod location;
mod session;

pub use config::Config;
pub use error::{Error, Result};
pub use loader::load_records;
pub use location::{FixedLocationService, LocationService};
pub use session::Session;
