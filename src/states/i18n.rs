//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::SignupGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Current locale from the global store
pub fn current_locale(cx: &App) -> String {
    cx.global::<SignupGlobalStore>().read(cx).locale().to_string()
}

/// Get translated string from "form" namespace
pub fn i18n_form(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<SignupGlobalStore>().read(cx).locale();
    t!(format!("form.{key}"), locale = locale).into()
}

/// Get translated string from "users" namespace
pub fn i18n_users(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<SignupGlobalStore>().read(cx).locale();
    t!(format!("users.{key}"), locale = locale).into()
}

/// Get translated string from "menu" namespace
pub fn i18n_menu(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<SignupGlobalStore>().read(cx).locale();
    t!(format!("menu.{key}"), locale = locale).into()
}
