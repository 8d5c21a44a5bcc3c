pub mod domain;
pub mod sort;
pub mod tier;
mod util;

pub use domain::*;
pub use sort::SortMode;
pub use tier::ColorTier;
pub use util::*;
