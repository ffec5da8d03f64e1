//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Registration form actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum FormAction {
    /// Submit the registration
    Submit,
}

/// Keystroke that submits the form from anywhere in the window
pub const SUBMIT_KEYSTROKE: &str = "secondary-enter";

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    let parts = keystroke.split('-');
    let mut display_text = String::new();

    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    for (i, part) in parts.enumerate() {
        if i > 0 {
            display_text.push_str(separator);
        }

        let symbol = match part {
            "secondary" | "cmd" => {
                #[cfg(target_os = "macos")]
                { "⌘" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "ctrl" => {
                #[cfg(target_os = "macos")]
                { "⌃" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "alt" => {
                #[cfg(target_os = "macos")]
                { "⌥" }
                #[cfg(not(target_os = "macos"))]
                { "Alt" }
            }
            "shift" => {
                #[cfg(target_os = "macos")]
                { "⇧" }
                #[cfg(not(target_os = "macos"))]
                { "Shift" }
            }
            "enter" => {
                #[cfg(target_os = "macos")]
                { "↩" }
                #[cfg(not(target_os = "macos"))]
                { "Enter" }
            }
            "escape" => "Esc",
            c => {
                display_text.push_str(&c.to_uppercase());
                continue;
            }
        };
        display_text.push_str(symbol);
    }

    display_text
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Registration form
        KeyBinding::new(SUBMIT_KEYSTROKE, FormAction::Submit, None),
    ]
}
