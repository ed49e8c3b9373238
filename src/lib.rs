//! Looks up active National Weather Service alerts for a two-letter state code and
//! shows a count plus the headlines on a pluggable display surface.

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod nws;
pub mod region;

pub use controller::{AlertQueryController, CycleOutcome, UiState};
pub use display::{DisplaySurface, RenderedAlerts, TerminalSurface};
pub use error::{AlertQueryError, ErrorKind, ValidationError};
pub use nws::alert::AlertCollection;
pub use nws::{Alert, AlertSource, NwsClient};
pub use region::RegionCode;
