use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::warn;

use crate::display::{DisplaySurface, RenderedAlerts};

/// Line-oriented surface for a terminal. Results and errors are written as they
/// arrive; clearing is a no-op since printed lines can't be taken back.
pub struct TerminalSurface<W: Write + Send> {
    input: Mutex<String>,
    out: Mutex<W>
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        TerminalSurface {
            input: Mutex::new(String::new()),
            out: Mutex::new(out)
        }
    }

    pub fn set_input(&self, value: &str) {
        *self.input.lock().unwrap_or_else(PoisonError::into_inner) = value.to_string();
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lines<'a>(&self, lines: impl IntoIterator<Item = &'a str>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);

        for line in lines {
            if let Err(err) = writeln!(out, "{}", line) {
                warn!("Failed to write to terminal: {}", err);
                return;
            }
        }

        if let Err(err) = out.flush() {
            warn!("Failed to flush terminal output: {}", err);
        }
    }
}

impl<W: Write + Send> DisplaySurface for TerminalSurface<W> {
    fn take_input(&self) -> String {
        std::mem::take(&mut *self.input.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn clear_results(&self) {}

    fn show_results(&self, rendered: &RenderedAlerts) {
        let items: Vec<String> = rendered.items.iter().map(|item| format!("  - {}", item)).collect();

        self.write_lines(std::iter::once(rendered.summary.as_str()).chain(items.iter().map(String::as_str)));
    }

    fn show_error(&self, message: &str) {
        self.write_lines([format!("Error: {}", message).as_str()]);
    }

    fn clear_error(&self) {}

    fn show_spinner(&self) {
        self.write_lines(["Fetching alerts..."]);
    }

    fn hide_spinner(&self) {}
}
