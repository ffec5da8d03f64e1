//! Constants
//!
//! Centralized layout and service constants.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Width of the form column
pub const FORM_MAX_WIDTH: f32 = 448.0;

/// User API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
pub const ADD_USER_PATH: &str = "/addUser";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings and log file names
pub const SETTINGS_FILE_NAME: &str = "signup-gui.toml";
pub const LOG_FILE_NAME: &str = "signup-gui.log";
