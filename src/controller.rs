use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use crate::display::{render_alerts, DisplaySurface};
use crate::error::AlertQueryError;
use crate::nws::alert::AlertCollection;
use crate::nws::AlertSource;
use crate::region::validate_region;

/// What the display currently reflects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Success(AlertCollection),
    Failed(String)
}

/// How a single interaction cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Rendered(AlertCollection),
    Failed(AlertQueryError),
    /// A newer cycle started while this one was waiting on the network, so its
    /// result was dropped without touching the display.
    Superseded
}

/// Drives the validate → fetch → render-or-error cycle against an injected surface.
///
/// Every cycle is stamped with a generation number. Only the most recently started
/// cycle may write to the surface once its fetch resolves, which keeps overlapping
/// triggers from fighting over the display: the latest trigger wins.
pub struct AlertQueryController<S: AlertSource, D: DisplaySurface> {
    source: S,
    surface: Arc<D>,
    generation: AtomicU64,
    state: Mutex<UiState>
}

impl<S: AlertSource, D: DisplaySurface> AlertQueryController<S, D> {
    pub fn new(source: S, surface: Arc<D>) -> Self {
        surface.clear_error();
        surface.hide_spinner();

        AlertQueryController {
            source,
            surface,
            generation: AtomicU64::new(0),
            state: Mutex::new(UiState::Idle)
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn surface(&self) -> &Arc<D> {
        &self.surface
    }

    pub fn state(&self) -> UiState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Reacts to the query action: takes whatever is in the input field (leaving it
    /// empty) and runs a cycle with it.
    pub async fn handle_query(&self) -> CycleOutcome {
        let raw = self.surface.take_input();
        self.submit(&raw).await
    }

    /// Runs one cycle for input text that has already been taken off the surface.
    pub async fn submit(&self, raw: &str) -> CycleOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.surface.clear_results();
        self.surface.clear_error();

        let _spinner = SpinnerGuard { controller: self, generation };

        let region = match validate_region(raw) {
            Ok(region) => region,
            Err(err) => {
                debug!("Rejected region input {:?}: {}", raw, err);
                return self.fail(AlertQueryError::from(err));
            }
        };

        info!("Querying active alerts for {}", region);
        self.surface.show_spinner();
        self.set_state(UiState::Loading);

        let result = self.source.fetch_alerts(&region).await;

        if !self.is_current(generation) {
            debug!("Dropping stale result for {} (cycle {})", region, generation);
            return CycleOutcome::Superseded;
        }

        match result {
            Ok(collection) => {
                let rendered = render_alerts(&collection);
                self.surface.show_results(&rendered);
                self.surface.clear_error();
                self.set_state(UiState::Success(collection.clone()));

                debug!("Rendered {} alerts for {}", collection.count(), region);
                CycleOutcome::Rendered(collection)
            }
            Err(err) => {
                debug!("Alert query for {} failed: {}", region, err);
                self.fail(err)
            }
        }
    }

    fn fail(&self, err: AlertQueryError) -> CycleOutcome {
        let message = err.message();
        self.surface.show_error(&message);
        self.set_state(UiState::Failed(message));

        CycleOutcome::Failed(err)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn set_state(&self, state: UiState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

/// Hides the spinner when a cycle ends, including by unwinding, unless a newer
/// cycle has taken over the display.
struct SpinnerGuard<'a, S: AlertSource, D: DisplaySurface> {
    controller: &'a AlertQueryController<S, D>,
    generation: u64
}

impl<S: AlertSource, D: DisplaySurface> Drop for SpinnerGuard<'_, S, D> {
    fn drop(&mut self) {
        if !self.controller.is_current(self.generation) {
            return;
        }

        self.controller.surface.hide_spinner();

        let mut state = self.controller.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == UiState::Loading {
            *state = UiState::Idle;
        }
    }
}
