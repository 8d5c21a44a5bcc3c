mod cafe;
mod geo;

pub use cafe::*;
pub use geo::*;
