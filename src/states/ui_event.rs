//! UI Events
//!
//! Events emitted from state layer to UI layer for toasts and
//! other user-facing feedback.

use rust_i18n::t;

/// UI events for user feedback
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UIEvent {
    /// Display a toast notification
    Toast {
        /// What to tell the user
        notice: Notice,
    },

    /// All inputs were emptied by the state layer
    FieldsCleared,
}

/// Severity level for UI notifications
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationSeverity {
    /// Success message (auto-dismiss)
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

/// A user-facing message produced by the registration flow
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Submit attempted with at least one empty field
    MissingFields,
    /// The backend accepted the registration
    Registered,
    /// The create-request failed
    SubmissionFailed { reason: String },
    /// Submit attempted while a request is in flight
    InFlight,
}

impl Notice {
    pub fn severity(&self) -> NotificationSeverity {
        match self {
            Notice::MissingFields | Notice::SubmissionFailed { .. } => NotificationSeverity::Error,
            Notice::Registered => NotificationSeverity::Success,
            Notice::InFlight => NotificationSeverity::Warning,
        }
    }

    /// Translated message text
    pub fn message(&self, locale: &str) -> String {
        match self {
            Notice::MissingFields => t!("notice.missing_fields", locale = locale).to_string(),
            Notice::Registered => t!("notice.registered", locale = locale).to_string(),
            Notice::SubmissionFailed { reason } => {
                t!("notice.submission_failed", locale = locale, reason = reason).to_string()
            }
            Notice::InFlight => t!("notice.in_flight", locale = locale).to_string(),
        }
    }
}

/// Sink for notices; the toast surface in the app, a recorder in tests
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}
