mod formatters;
mod view_models;
mod views;

pub use formatters::{format_distance, format_rating, star_row};
pub use view_models::{
    CardViewModel, MarkerDescriptor, MarkerFeed, UserMarker, card_view_models, marker_feed,
};
pub use views::{print_cards, print_detail, print_header};
