pub mod terminal;

use crate::nws::alert::AlertCollection;

pub use terminal::TerminalSurface;

pub const MISSING_HEADLINE: &str = "No headline available";

/// The passive display the controller drives: an input field, a results area, an
/// error banner and a loading indicator. Implementations own their state behind
/// interior mutability so a surface can be shared between cycles.
pub trait DisplaySurface: Send + Sync {
    /// Returns the current input text and empties the field.
    fn take_input(&self) -> String;

    fn clear_results(&self);
    fn show_results(&self, rendered: &RenderedAlerts);

    fn show_error(&self, message: &str);
    fn clear_error(&self);

    fn show_spinner(&self);
    fn hide_spinner(&self);
}

/// Summary line plus one text entry per alert, ready to put on a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAlerts {
    pub summary: String,
    pub items: Vec<String>
}

pub fn render_alerts(collection: &AlertCollection) -> RenderedAlerts {
    let items = collection.alerts.iter()
        .map(|alert| match alert.headline.as_deref() {
            Some(headline) if !headline.is_empty() => headline.to_string(),
            _ => MISSING_HEADLINE.to_string()
        })
        .collect();

    RenderedAlerts {
        summary: format!("{}: {}", collection.title, collection.count()),
        items
    }
}
