use crate::presentation::formatters::{format_distance, format_rating};
use cafemap_engine::{AppState, CafeView, marker_color};
use cafemap_types::{ColorTier, Coordinates, DEFAULT_MAP_CENTER, SortMode};
use serde::Serialize;

/// Marker color for the user's own position (not tier-based)
const USER_MARKER_COLOR: &str = "#EF4444";

/// One rendered card, shared by terminal and JSON output
#[derive(Debug, Clone, Serialize)]
pub struct CardViewModel {
    pub id: String,
    pub name: String,
    pub overall: Option<f64>,
    pub secondary: Option<f64>,
    /// Filled stars out of five; absent when the overall rating is absent
    pub stars_filled: Option<u8>,
    pub workable: bool,
    pub distance_km: Option<f64>,
    pub selected: bool,
    /// Tier under the current sort mode, same tint the map marker gets
    pub tier: ColorTier,
    pub coordinates: Coordinates,
}

impl CardViewModel {
    pub fn from_view(view: &CafeView, sort_mode: SortMode, selected_id: Option<&str>) -> Self {
        Self {
            id: view.record.id.clone(),
            name: view.record.name.clone(),
            overall: view.record.ratings.overall,
            secondary: view.record.ratings.secondary,
            stars_filled: view.record.ratings.overall.map(stars_for),
            workable: view.record.workable,
            distance_km: view.distance_km,
            selected: selected_id == Some(view.record.id.as_str()),
            tier: marker_color(view, sort_mode),
            coordinates: view.record.coordinates,
        }
    }
}

pub fn card_view_models(views: &[CafeView], state: &AppState) -> Vec<CardViewModel> {
    views
        .iter()
        .map(|view| CardViewModel::from_view(view, state.sort_mode, state.selected_id.as_deref()))
        .collect()
}

// Star thresholds from the original card design: 9.0/8.0/7.0/6.0 steps,
// anything rated below 6 still shows one star.
fn stars_for(rating: f64) -> u8 {
    if rating >= 9.0 {
        5
    } else if rating >= 8.0 {
        4
    } else if rating >= 7.0 {
        3
    } else if rating >= 6.0 {
        2
    } else {
        1
    }
}

/// Everything the external map widget needs for one render pass
#[derive(Debug, Serialize)]
pub struct MarkerFeed {
    pub center: Coordinates,
    pub selected_id: Option<String>,
    pub user_marker: Option<UserMarker>,
    pub markers: Vec<MarkerDescriptor>,
}

#[derive(Debug, Serialize)]
pub struct UserMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
    pub popup: String,
}

#[derive(Debug, Serialize)]
pub struct MarkerDescriptor {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
    pub tier: ColorTier,
    pub selected: bool,
    pub popup: String,
}

pub fn marker_feed(views: &[CafeView], state: &AppState) -> MarkerFeed {
    let markers = views
        .iter()
        .map(|view| {
            let tier = marker_color(view, state.sort_mode);
            MarkerDescriptor {
                id: view.record.id.clone(),
                latitude: view.record.coordinates.latitude,
                longitude: view.record.coordinates.longitude,
                color: tier.hex().to_string(),
                tier,
                selected: state.selected_id.as_deref() == Some(view.record.id.as_str()),
                popup: popup_content(view),
            }
        })
        .collect();

    MarkerFeed {
        center: DEFAULT_MAP_CENTER,
        selected_id: state.selected_id.clone(),
        user_marker: state.user_location.map(|at| UserMarker {
            latitude: at.latitude,
            longitude: at.longitude,
            color: USER_MARKER_COLOR.to_string(),
            popup: "You are here".to_string(),
        }),
        markers,
    }
}

// Same fields the original popup showed, flattened to one line per fact
fn popup_content(view: &CafeView) -> String {
    let mut popup = format!(
        "{}\nTotal: {}\nFlat white: {}\nWorkable: {}",
        view.record.name,
        format_rating(view.record.ratings.overall),
        format_rating(view.record.ratings.secondary),
        if view.record.workable { "yes" } else { "no" },
    );
    if let Some(km) = view.distance_km {
        popup.push_str(&format!("\nDistance: {}", format_distance(km)));
    }
    popup
}
