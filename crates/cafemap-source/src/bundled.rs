use cafemap_types::{CafeRecord, Coordinates, Ratings};
use once_cell::sync::Lazy;

/// Curated starter list used when no sheet URL or CSV path is configured.
/// Same shape as ingested records; ids are pre-slugged from the names.
static BUNDLED: Lazy<Vec<CafeRecord>> = Lazy::new(|| {
    vec![
        CafeRecord::new(
            "caf-estelar",
            "Café Estelar",
            Coordinates::new(20.6766, -103.3704),
            Ratings {
                overall: Some(9.6),
                secondary: Some(9.0),
            },
            true,
        ),
        CafeRecord::new(
            "t-ndem-caf",
            "Tándem Café",
            Coordinates::new(20.6739, -103.3662),
            Ratings {
                overall: Some(9.1),
                secondary: Some(8.8),
            },
            true,
        ),
        CafeRecord::new(
            "la-flor-de-c-rdoba",
            "La Flor de Córdoba",
            Coordinates::new(20.6701, -103.3593),
            Ratings {
                overall: Some(8.4),
                secondary: None,
            },
            false,
        ),
        CafeRecord::new(
            "negra-espuma",
            "Negra Espuma",
            Coordinates::new(20.7103, -103.4104),
            Ratings {
                overall: Some(8.9),
                secondary: Some(9.3),
            },
            true,
        ),
        CafeRecord::new(
            "el-terco",
            "El Terco",
            Coordinates::new(20.6478, -103.3786),
            Ratings {
                overall: Some(7.8),
                secondary: Some(7.5),
            },
            false,
        ),
        CafeRecord::new(
            "patio-andaluz",
            "Patio Andaluz",
            Coordinates::new(20.6881, -103.4009),
            Ratings {
                overall: None,
                secondary: None,
            },
            false,
        ),
    ]
});

/// Fresh copy of the bundled list
pub fn bundled_records() -> Vec<CafeRecord> {
    BUNDLED.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_records_uphold_invariants() {
        let records = bundled_records();
        assert!(!records.is_empty());

        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len(), "ids must be unique");

        for record in &records {
            assert!(record.coordinates.is_finite());
            assert_eq!(record.id, cafemap_types::slugify(&record.name));
        }
    }
}
