use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the visible record list.
///
/// `Overall` and `Secondary` sort descending by the respective rating with
/// absent scores last. `Distance` sorts ascending by proximity and is a no-op
/// when no user location is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Overall,
    Secondary,
    Distance,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::Overall => "overall",
            SortMode::Secondary => "secondary",
            SortMode::Distance => "distance",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overall" => Ok(SortMode::Overall),
            "secondary" => Ok(SortMode::Secondary),
            "distance" => Ok(SortMode::Distance),
            other => Err(format!(
                "unknown sort mode '{}' (expected overall, secondary or distance)",
                other
            )),
        }
    }
}
