#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use state_alerts::{AlertCollection, AlertQueryError, AlertSource, DisplaySurface, RegionCode, RenderedAlerts};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    TakeInput,
    ClearResults,
    ShowResults,
    ShowError(String),
    ClearError,
    ShowSpinner,
    HideSpinner
}

/// In-memory surface that remembers what is visible and every call made on it.
#[derive(Default)]
pub struct RecordingSurface {
    pub input: Mutex<String>,
    pub results: Mutex<Option<RenderedAlerts>>,
    pub error: Mutex<Option<String>>,
    pub spinner_visible: Mutex<bool>,
    pub events: Mutex<Vec<SurfaceEvent>>,
    pub panic_on_render: bool
}

impl RecordingSurface {
    pub fn with_input(value: &str) -> Self {
        let surface = RecordingSurface::default();
        surface.set_input(value);
        surface
    }

    pub fn panicking() -> Self {
        RecordingSurface { panic_on_render: true, ..RecordingSurface::default() }
    }

    pub fn set_input(&self, value: &str) {
        *self.input.lock().unwrap() = value.to_string();
    }

    pub fn input(&self) -> String {
        self.input.lock().unwrap().clone()
    }

    pub fn results(&self) -> Option<RenderedAlerts> {
        self.results.lock().unwrap().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }

    pub fn spinner_visible(&self) -> bool {
        *self.spinner_visible.lock().unwrap()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn reset_events(&self) {
        self.events.lock().unwrap().clear();
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl DisplaySurface for RecordingSurface {
    fn take_input(&self) -> String {
        self.record(SurfaceEvent::TakeInput);
        std::mem::take(&mut *self.input.lock().unwrap())
    }

    fn clear_results(&self) {
        self.record(SurfaceEvent::ClearResults);
        *self.results.lock().unwrap() = None;
    }

    fn show_results(&self, rendered: &RenderedAlerts) {
        self.record(SurfaceEvent::ShowResults);
        if self.panic_on_render {
            panic!("render blew up");
        }
        *self.results.lock().unwrap() = Some(rendered.clone());
    }

    fn show_error(&self, message: &str) {
        self.record(SurfaceEvent::ShowError(message.to_string()));
        *self.error.lock().unwrap() = Some(message.to_string());
    }

    fn clear_error(&self) {
        self.record(SurfaceEvent::ClearError);
        *self.error.lock().unwrap() = None;
    }

    fn show_spinner(&self) {
        self.record(SurfaceEvent::ShowSpinner);
        *self.spinner_visible.lock().unwrap() = true;
    }

    fn hide_spinner(&self) {
        self.record(SurfaceEvent::HideSpinner);
        *self.spinner_visible.lock().unwrap() = false;
    }
}

/// Canned responses per region code. Yields once before answering so overlapping
/// cycles can interleave.
#[derive(Default)]
pub struct FakeSource {
    responses: HashMap<String, Result<AlertCollection, AlertQueryError>>,
    calls: AtomicUsize
}

impl FakeSource {
    pub fn with(mut self, region: &str, response: Result<AlertCollection, AlertQueryError>) -> Self {
        self.responses.insert(region.to_string(), response);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AlertSource for FakeSource {
    async fn fetch_alerts(&self, region: &RegionCode) -> Result<AlertCollection, AlertQueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        self.responses.get(region.as_str()).cloned()
            .unwrap_or_else(|| panic!("no canned response for {}", region))
    }
}
