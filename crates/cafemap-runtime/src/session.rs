use crate::location::LocationService;
use crate::{Error, Result};
use cafemap_engine::{AppEvent, AppState, CafeView, reduce};
use cafemap_types::CafeRecord;
use std::sync::Arc;

/// Owner of the session state tuple.
///
/// All updates flow through [`AppEvent`] dispatch; each dispatch replaces
/// the whole state, so readers never observe a half-applied change. The
/// session also drives location requests and routes their results back in
/// with the generation they were issued under.
pub struct Session {
    state: AppState,
    location_service: Option<Arc<dyn LocationService>>,
}

impl Session {
    pub fn new(records: Vec<CafeRecord>, location_service: Option<Arc<dyn LocationService>>) -> Self {
        Self {
            state: AppState::new(records),
            location_service,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn views(&self) -> Vec<CafeView> {
        self.state.views()
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        self.state = reduce(&self.state, event);
    }

    /// Request the current position and fold the answer into state.
    ///
    /// `silent` mirrors the automatic attempt at session start: failures are
    /// swallowed there, while an explicit user request surfaces the error.
    /// Either way a failure leaves the previous location untouched, and a
    /// result belonging to a superseded request is discarded by the reducer.
    pub async fn request_location(&mut self, silent: bool) -> Result<()> {
        let Some(service) = self.location_service.clone() else {
            if silent {
                return Ok(());
            }
            return Err(Error::Location(
                "no location service is configured".to_string(),
            ));
        };

        self.dispatch(AppEvent::LocationRequested);
        let generation = self.state.location_generation;

        let outcome = tokio::task::spawn_blocking(move || service.current_position())
            .await
            .map_err(|err| Error::Location(format!("location task failed: {}", err)))?;

        match outcome {
            Ok(position) => {
                self.dispatch(AppEvent::LocationResolved {
                    generation,
                    position: Some(position),
                });
                Ok(())
            }
            Err(err) => {
                self.dispatch(AppEvent::LocationResolved {
                    generation,
                    position: None,
                });
                if silent { Ok(()) } else { Err(err) }
            }
        }
    }
}
