use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete display bucket for a continuous value (rating or distance).
///
/// Tiers carry the marker palette used by the map feed; terminal rendering
/// maps them to ANSI colors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTier {
    ExcellentDark,
    Excellent,
    Good,
    Fair,
    Poor,
    /// Value absent from the source; rendered neutral gray
    Unknown,
}

impl ColorTier {
    /// Marker hex color as used by the map widget
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTier::ExcellentDark => "#15803d",
            ColorTier::Excellent => "#22c55e",
            ColorTier::Good => "#84cc16",
            ColorTier::Fair => "#eab308",
            ColorTier::Poor => "#f97316",
            ColorTier::Unknown => "#9CA3AF",
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorTier::ExcellentDark => "excellent-dark",
            ColorTier::Excellent => "excellent",
            ColorTier::Good => "good",
            ColorTier::Fair => "fair",
            ColorTier::Poor => "poor",
            ColorTier::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serializes_kebab_case() {
        let json = serde_json::to_string(&ColorTier::ExcellentDark).unwrap();
        assert_eq!(json, "\"excellent-dark\"");
    }

    #[test]
    fn test_every_tier_has_a_color() {
        for tier in [
            ColorTier::ExcellentDark,
            ColorTier::Excellent,
            ColorTier::Good,
            ColorTier::Fair,
            ColorTier::Poor,
            ColorTier::Unknown,
        ] {
            assert!(tier.hex().starts_with('#'));
        }
    }
}
