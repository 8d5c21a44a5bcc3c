use cafemap_engine::{derive_views, marker_color};
use cafemap_types::{CafeRecord, ColorTier, Coordinates, Ratings, SortMode};

fn record(
    id: &str,
    name: &str,
    coordinates: Coordinates,
    overall: Option<f64>,
    secondary: Option<f64>,
    workable: bool,
) -> CafeRecord {
    CafeRecord::new(
        id,
        name,
        coordinates,
        Ratings { overall, secondary },
        workable,
    )
}

fn fixture() -> Vec<CafeRecord> {
    vec![
        record(
            "cafe-estelar",
            "Café Estelar",
            Coordinates::new(20.6766, -103.3704),
            Some(9.2),
            Some(8.5),
            true,
        ),
        record(
            "la-ideal",
            "La Ideal",
            Coordinates::new(20.6669, -103.3918),
            None,
            Some(9.0),
            false,
        ),
        record(
            "norte",
            "Norte",
            Coordinates::new(20.7214, -103.3918),
            Some(8.1),
            None,
            true,
        ),
        record(
            "sur",
            "Sur",
            Coordinates::new(20.6, -103.4),
            Some(9.2),
            Some(7.0),
            false,
        ),
        record(
            "oriente",
            "Oriente",
            Coordinates::new(20.68, -103.3),
            Some(8.8),
            None,
            false,
        ),
    ]
}

#[test]
fn test_workable_filter_keeps_input_order() {
    let records = fixture();
    let views = derive_views(&records, true, SortMode::Distance, None);

    let ids: Vec<&str> = views.iter().map(|v| v.record.id.as_str()).collect();
    assert_eq!(ids, vec!["cafe-estelar", "norte"]);
}

#[test]
fn test_overall_sort_puts_absent_last() {
    let records = fixture();
    let views = derive_views(&records, false, SortMode::Overall, None);

    let ids: Vec<&str> = views.iter().map(|v| v.record.id.as_str()).collect();
    // 9.2 ties keep input order (stable sort); the rating-less record is last
    assert_eq!(ids, vec!["cafe-estelar", "sur", "oriente", "norte", "la-ideal"]);
}

#[test]
fn test_secondary_sort_puts_absent_last() {
    let records = fixture();
    let views = derive_views(&records, false, SortMode::Secondary, None);

    let ids: Vec<&str> = views.iter().map(|v| v.record.id.as_str()).collect();
    assert_eq!(ids, vec!["la-ideal", "cafe-estelar", "sur", "norte", "oriente"]);
}

#[test]
fn test_distance_sort_without_location_is_a_noop() {
    let records = fixture();
    let views = derive_views(&records, false, SortMode::Distance, None);

    let ids: Vec<&str> = views.iter().map(|v| v.record.id.as_str()).collect();
    assert_eq!(ids, vec!["cafe-estelar", "la-ideal", "norte", "sur", "oriente"]);
    assert!(views.iter().all(|v| v.distance_km.is_none()));
}

#[test]
fn test_distance_sort_with_location_is_ascending() {
    let records = fixture();
    let here = Coordinates::new(20.6736, -103.405);
    let views = derive_views(&records, false, SortMode::Distance, Some(here));

    let distances: Vec<f64> = views.iter().map(|v| v.distance_km.unwrap()).collect();
    let mut sorted = distances.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(distances, sorted);
}

#[test]
fn test_derivation_is_idempotent_and_does_not_mutate() {
    let records = fixture();
    let first = derive_views(&records, true, SortMode::Overall, None);
    let second = derive_views(&records, true, SortMode::Overall, None);

    assert_eq!(first, second);
    assert_eq!(records, fixture());
}

#[test]
fn test_empty_input_yields_empty_output() {
    let views = derive_views(&[], true, SortMode::Distance, None);
    assert!(views.is_empty());
}

#[test]
fn test_marker_color_follows_sort_mode() {
    let records = fixture();
    let here = Coordinates::new(20.6766, -103.3704);
    let views = derive_views(&records, false, SortMode::Distance, Some(here));

    // Nearest record sits at the location itself
    assert_eq!(views[0].record.id, "cafe-estelar");
    assert_eq!(
        marker_color(&views[0], SortMode::Distance),
        ColorTier::ExcellentDark
    );
    // Same record tinted by rating instead
    assert_eq!(
        marker_color(&views[0], SortMode::Overall),
        ColorTier::Excellent
    );
    // Rating-less record under a rating sort is unknown
    let la_ideal = views
        .iter()
        .find(|v| v.record.id == "la-ideal")
        .unwrap();
    assert_eq!(marker_color(la_ideal, SortMode::Overall), ColorTier::Unknown);
}

#[test]
fn test_derived_views_snapshot() {
    let records = vec![
        record(
            "cafe-estelar",
            "Café Estelar",
            Coordinates::new(20.6766, -103.3704),
            Some(9.2),
            Some(8.5),
            true,
        ),
        record(
            "la-ideal",
            "La Ideal",
            Coordinates::new(20.6669, -103.3918),
            None,
            Some(9.0),
            false,
        ),
    ];
    let views = derive_views(&records, false, SortMode::Overall, None);

    insta::assert_json_snapshot!(views, @r#"
    [
      {
        "record": {
          "id": "cafe-estelar",
          "name": "Café Estelar",
          "coordinates": {
            "latitude": 20.6766,
            "longitude": -103.3704
          },
          "ratings": {
            "overall": 9.2,
            "secondary": 8.5
          },
          "workable": true
        },
        "distance_km": null
      },
      {
        "record": {
          "id": "la-ideal",
          "name": "La Ideal",
          "coordinates": {
            "latitude": 20.6669,
            "longitude": -103.3918
          },
          "ratings": {
            "overall": null,
            "secondary": 9.0
          },
          "workable": false
        },
        "distance_km": null
      }
    ]
    "#);
}
