use crate::view::{CafeView, derive_views};
use cafemap_types::{CafeRecord, Coordinates, SortMode};

/// The whole session state as one immutable record. Every update goes
/// through [`reduce`], which returns a fresh state; nothing is patched in
/// place, so a renderer always observes a complete, consistent tuple.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub records: Vec<CafeRecord>,
    pub filter_workable: bool,
    pub sort_mode: SortMode,
    pub user_location: Option<Coordinates>,
    /// At most one selected record; set on selection, never cleared
    /// automatically, not persisted
    pub selected_id: Option<String>,
    /// Generation of the latest location request. Resolutions carrying an
    /// older generation are discarded, so a slow early request can never
    /// overwrite the answer to a newer one.
    pub location_generation: u64,
}

impl AppState {
    pub fn new(records: Vec<CafeRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Derived view list for the current state tuple
    pub fn views(&self) -> Vec<CafeView> {
        derive_views(
            &self.records,
            self.filter_workable,
            self.sort_mode,
            self.user_location,
        )
    }
}

/// User-driven and asynchronous inputs that move the session forward
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    RecordsLoaded(Vec<CafeRecord>),
    ToggleWorkableFilter,
    SetSortMode(SortMode),
    /// A location request was issued; bumps the generation counter. The
    /// dispatcher reads the new generation off the returned state and tags
    /// the in-flight request with it.
    LocationRequested,
    /// A location request finished. `position` is `None` on failure, which
    /// leaves the previous location untouched.
    LocationResolved {
        generation: u64,
        position: Option<Coordinates>,
    },
    Select(String),
}

/// Pure state transition: `(state, event) -> state`
pub fn reduce(state: &AppState, event: AppEvent) -> AppState {
    let mut next = state.clone();

    match event {
        AppEvent::RecordsLoaded(records) => {
            next.records = records;
        }
        AppEvent::ToggleWorkableFilter => {
            next.filter_workable = !next.filter_workable;
        }
        AppEvent::SetSortMode(mode) => {
            next.sort_mode = mode;
        }
        AppEvent::LocationRequested => {
            next.location_generation += 1;
        }
        AppEvent::LocationResolved {
            generation,
            position,
        } => {
            // Stale result from a superseded request
            if generation != next.location_generation {
                return next;
            }
            if let Some(position) = position {
                next.user_location = Some(position);
            }
        }
        AppEvent::Select(id) => {
            next.selected_id = Some(id);
        }
    }

    next
}
