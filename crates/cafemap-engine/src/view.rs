use crate::color;
use crate::distance;
use cafemap_types::{CafeRecord, ColorTier, Coordinates, SortMode};
use serde::Serialize;
use std::cmp::Ordering;

/// Display projection of one record: the record itself plus the distance
/// annotation for the current user location. Records are never mutated;
/// every derivation builds a fresh list of these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CafeView {
    pub record: CafeRecord,
    pub distance_km: Option<f64>,
}

/// Derive the ordered, annotated list that both the card list and the map
/// feed render.
///
/// Pipeline: filter on `workable` when the flag is set, annotate with the
/// distance to `user_location` when one is known, then stable-sort per
/// `sort_mode`. Sorting by distance without a location is an explicit no-op,
/// not an error: the filtered input order is preserved.
pub fn derive_views(
    records: &[CafeRecord],
    filter_workable: bool,
    sort_mode: SortMode,
    user_location: Option<Coordinates>,
) -> Vec<CafeView> {
    let mut views: Vec<CafeView> = records
        .iter()
        .filter(|record| !filter_workable || record.workable)
        .map(|record| CafeView {
            record: record.clone(),
            distance_km: user_location.map(|at| distance::haversine_km(at, record.coordinates)),
        })
        .collect();

    match sort_mode {
        SortMode::Overall => {
            views.sort_by(|a, b| descending(a.record.ratings.overall, b.record.ratings.overall));
        }
        SortMode::Secondary => {
            views.sort_by(|a, b| descending(a.record.ratings.secondary, b.record.ratings.secondary));
        }
        SortMode::Distance => {
            if user_location.is_some() {
                views.sort_by(|a, b| ascending(a.distance_km, b.distance_km));
            }
        }
    }

    views
}

/// Tier used to tint a marker or card: the value the current sort mode puts
/// on display (overall rating, secondary rating, or distance).
pub fn marker_color(view: &CafeView, sort_mode: SortMode) -> ColorTier {
    let value = match sort_mode {
        SortMode::Overall => view.record.ratings.overall,
        SortMode::Secondary => view.record.ratings.secondary,
        SortMode::Distance => view.distance_km,
    };
    color::tier_for(value, sort_mode)
}

// Absent keys sort last in both directions; ties keep input order because
// sort_by is stable.
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn ascending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
