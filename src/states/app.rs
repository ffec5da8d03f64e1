//! Application State
//!
//! Persisted settings (locale, theme, API connection) and the global store.

use crate::constants::SETTINGS_FILE_NAME;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::services::ApiSettings;
use crate::states::RegistrationState;
use gpui::{Action, App, AppContext, Context, Entity, Global};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(SETTINGS_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupAppState {
    locale: Option<String>,
    theme: Option<String>,
    api: ApiSettings,
}

impl SignupAppState {
    /// Load state from the settings file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;

        let mut state = Self::parse(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once('-') {
                state.locale = Some(lang.to_string());
            }
        }

        Ok(state)
    }

    /// Parse settings; an empty file yields defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(value)?)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Active locale, falling back to English for unsupported languages
    pub fn locale(&self) -> &str {
        match self.locale.as_deref() {
            Some(l) if SUPPORTED_LOCALES.contains(&l) => l,
            _ => "en",
        }
    }

    pub fn api(&self) -> &ApiSettings {
        &self.api
    }

    // ==================== Setters ====================

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<SignupGlobalStore>()`
#[derive(Clone)]
pub struct SignupGlobalStore {
    app_state: Entity<SignupAppState>,
    registration: Entity<RegistrationState>,
}

impl SignupGlobalStore {
    /// Create a new global store
    pub fn new(app_state: Entity<SignupAppState>, registration: Entity<RegistrationState>) -> Self {
        Self {
            app_state,
            registration,
        }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<SignupAppState> {
        self.app_state.clone()
    }

    /// Get the registration state entity
    pub fn registration(&self) -> Entity<RegistrationState> {
        self.registration.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a SignupAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut SignupAppState, &mut Context<SignupAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for SignupGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &SignupAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut SignupAppState, &App) + Send + 'static + Clone,
{
    let store = cx.global::<SignupGlobalStore>().clone();

    cx.spawn(async move |cx| {
        // Step 1: Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            cx.notify();
            state.clone()
        });

        // Step 2: Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved");
                    }
                })
                .await;
        }

        // Step 3: Refresh windows
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}
