//! Error types for Signup-GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

use crate::domain::FormField;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Raised by input capture when required fields are empty
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ValidationError {
    /// One or more fields were left empty (listed in form order)
    #[snafu(display("Missing required fields: {}", FormField::join(missing)))]
    MissingFields { missing: Vec<FormField> },
}

/// Failure of the create-request
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SubmissionError {
    /// The request could not be delivered or timed out
    #[snafu(display("Could not reach {url}: {source}"))]
    Transport { url: String, source: reqwest::Error },

    /// The server answered with a non-success status
    #[snafu(display("Server answered {status}: {body}"))]
    Rejected { status: u16, body: String },

    /// The response body is not a user record
    #[snafu(display("Malformed response from {url}: {source}"))]
    Decode { url: String, source: reqwest::Error },

    /// The HTTP client could not be configured
    #[snafu(display("API client unavailable: {message}"))]
    Unavailable { message: String },
}

/// Why a submit never started
#[derive(Debug, Snafu)]
pub enum SubmitBlocked {
    /// Input capture failed
    #[snafu(display("{source}"))]
    Incomplete { source: ValidationError },

    /// A registration request is already in flight
    #[snafu(display("A registration is already in progress"))]
    InFlight,
}
