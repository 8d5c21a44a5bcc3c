// NOTE: cafemap Architecture Rationale
//
// Why Derive-on-Read (not stored view state)?
// - The visible list is a pure function of (records, filter, sort, location)
// - Re-deriving on every command keeps the record set immutable and makes
//   output reproducible for the same inputs
// - Trade-off: filter/sort work repeats per invocation, but the set is tiny
//
// Why One State Record + Reducer (not scattered flags)?
// - Every user input is an event folded into a fresh state tuple
// - Location answers carry the generation of the request that produced
//   them, so a stale answer can never clobber a newer one
//
// Why Marker Descriptors (not a map renderer)?
// - Tile loading, pan/zoom and popups belong to the external map widget
// - The CLI only owns the widget's input contract: coordinates, a tier
//   color and popup content per visible record, plus the selected id

mod args;
mod commands;
mod handlers;
mod presentation;
mod types;

pub use args::{Cli, Commands, ViewArgs};
pub use commands::run;
pub use types::OutputFormat;
