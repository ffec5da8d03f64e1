//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Action → State Method → spawn Service Call → Service Result → State Update → emit/notify → UI Refresh
//! ```

mod app;
mod form;
mod i18n;
mod registration;
mod ui_event;

pub use app::*;
pub use form::*;
pub use i18n::*;
pub use registration::*;
pub use ui_event::*;
