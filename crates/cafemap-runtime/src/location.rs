use crate::{Error, Result};
use cafemap_types::Coordinates;

/// External position provider, the stand-in for a browser geolocation API.
///
/// Implementations may block; the session runs them on a blocking task and
/// tags each request with a generation so a slow answer to an old request
/// can be discarded.
pub trait LocationService: Send + Sync + 'static {
    fn current_position(&self) -> Result<Coordinates>;
}

/// Service that always answers with one configured position
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationService {
    position: Coordinates,
}

impl FixedLocationService {
    pub fn new(position: Coordinates) -> Self {
        Self { position }
    }
}

impl LocationService for FixedLocationService {
    fn current_position(&self) -> Result<Coordinates> {
        if !self.position.is_finite() {
            return Err(Error::Location(format!(
                "configured position is not finite: {}",
                self.position
            )));
        }
        Ok(self.position)
    }
}
