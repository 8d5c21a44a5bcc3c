use crate::domain::Coordinates;
use serde::{Deserialize, Serialize};

/// Rating pair carried by every café entry. Either score may be absent when
/// the source field was blank or non-numeric; absence is never coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ratings {
    /// Overall score on the curators' 0-10 scale
    pub overall: Option<f64>,
    /// Sub-score for one specific drink (the flat white column in the sheet)
    pub secondary: Option<f64>,
}

/// One café entry as it exists in the working set.
///
/// Records are created once at ingestion and never mutated afterwards; view
/// derivation works on projections, not on the records themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CafeRecord {
    /// Stable identifier, unique within a loaded set. Derived from the name
    /// via slugification with a positional fallback for empty slugs.
    pub id: String,
    pub name: String,
    /// Always finite; rows failing coordinate parse are dropped at ingestion
    pub coordinates: Coordinates,
    pub ratings: Ratings,
    /// Whether the place is suited for working (seating, wifi, staying a while)
    pub workable: bool,
}

impl CafeRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinates: Coordinates,
        ratings: Ratings,
        workable: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
            ratings,
            workable,
        }
    }
}
