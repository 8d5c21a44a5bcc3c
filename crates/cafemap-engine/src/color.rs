use cafemap_types::{ColorTier, SortMode};

/// Map a value to its display tier under the given sort mode.
///
/// Rating modes share one 0-10-ish scale, best first; distance flips the
/// direction since fewer kilometers is better. Thresholds are inclusive on
/// the lower bound and evaluated top-down, so every finite value lands in
/// exactly one tier. An absent value is always `Unknown`.
pub fn tier_for(value: Option<f64>, mode: SortMode) -> ColorTier {
    let Some(value) = value else {
        return ColorTier::Unknown;
    };

    match mode {
        SortMode::Overall | SortMode::Secondary => {
            if value >= 9.5 {
                ColorTier::ExcellentDark
            } else if value >= 9.0 {
                ColorTier::Excellent
            } else if value >= 8.5 {
                ColorTier::Good
            } else if value >= 8.0 {
                ColorTier::Fair
            } else {
                ColorTier::Poor
            }
        }
        SortMode::Distance => {
            // Under 2 km is walkable
            if value < 2.0 {
                ColorTier::ExcellentDark
            } else if value < 5.0 {
                ColorTier::Fair
            } else {
                ColorTier::Poor
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_tiers() {
        assert_eq!(tier_for(Some(9.6), SortMode::Overall), ColorTier::ExcellentDark);
        assert_eq!(tier_for(Some(9.5), SortMode::Overall), ColorTier::ExcellentDark);
        assert_eq!(tier_for(Some(9.2), SortMode::Overall), ColorTier::Excellent);
        assert_eq!(tier_for(Some(8.7), SortMode::Secondary), ColorTier::Good);
        assert_eq!(tier_for(Some(8.0), SortMode::Overall), ColorTier::Fair);
        assert_eq!(tier_for(Some(7.9), SortMode::Overall), ColorTier::Poor);
    }

    #[test]
    fn test_distance_tiers() {
        assert_eq!(tier_for(Some(1.5), SortMode::Distance), ColorTier::ExcellentDark);
        assert_eq!(tier_for(Some(4.9), SortMode::Distance), ColorTier::Fair);
        assert_eq!(tier_for(Some(5.0), SortMode::Distance), ColorTier::Poor);
        assert_eq!(tier_for(Some(42.0), SortMode::Distance), ColorTier::Poor);
    }

    #[test]
    fn test_absent_is_unknown() {
        assert_eq!(tier_for(None, SortMode::Overall), ColorTier::Unknown);
        assert_eq!(tier_for(None, SortMode::Secondary), ColorTier::Unknown);
        assert_eq!(tier_for(None, SortMode::Distance), ColorTier::Unknown);
    }
}
