//! Signup GUI Library
//!
//! A desktop registration form: collects name, email and password, posts
//! them to a user-registration backend and lists the created records.

rust_i18n::i18n!("locales", fallback = "en");

pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
pub mod views;
