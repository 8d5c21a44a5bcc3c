// Engine module - Core derivation logic (distance, color tiers, view state)
// This layer sits between ingested records (types) and CLI presentation

pub mod color;
pub mod distance;
mod state;
mod view;

pub use state::{AppEvent, AppState, reduce};
pub use view::{CafeView, derive_views, marker_color};

use cafemap_types::{ColorTier, Coordinates, SortMode};

// Façade API - Stable public interface for CLI layer
// CLI should use these functions instead of directly accessing internal modules

/// Great-circle distance between two points in kilometers
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    distance::haversine_km(a, b)
}

/// Display tier for a value under the given sort mode
pub fn tier_for(value: Option<f64>, mode: SortMode) -> ColorTier {
    color::tier_for(value, mode)
}
