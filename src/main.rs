//! Signup GUI - Main Entry Point
//!
//! Registration form client for a user-registration HTTP backend.

use std::sync::Arc;

use gpui::{App, AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use gpui_component::{Root, Theme, ThemeMode, TitleBar};
use signup_gui::assets::Assets;
use signup_gui::constants::{
    LOG_FILE_NAME, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};
use signup_gui::helpers::{MenuAction, get_or_create_data_dir, is_development, new_key_bindings};
use signup_gui::services::{HttpUserApi, UnavailableUserApi, UserApi};
use signup_gui::states::{
    LocaleAction, RegistrationState, SignupAppState, SignupGlobalStore, ThemeAction,
    update_app_state_and_save,
};
use signup_gui::views::Workspace;
use tracing::{Level, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Console logging plus a daily log file in the data directory.
/// The returned guard must live until exit to flush the file writer.
fn init_tracing() -> Option<WorkerGuard> {
    let level = if is_development() { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let console = fmt::layer().with_timer(LocalTime::rfc_3339());

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(
                    fmt::layer()
                        .with_timer(LocalTime::rfc_3339())
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(filter).with(console).init();
            warn!(error = %e, "File logging disabled");
            None
        }
    }
}

fn build_user_api(state: &SignupAppState) -> Arc<dyn UserApi> {
    match HttpUserApi::new(state.api()) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            error!(error = %e, "User API misconfigured");
            Arc::new(UnavailableUserApi::new(e.to_string()))
        }
    }
}

fn register_actions(cx: &mut App) {
    cx.bind_keys(new_key_bindings());

    cx.on_action(|_: &MenuAction, cx: &mut App| cx.quit());

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = match action {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        };
        update_app_state_and_save(cx, "locale", move |state, _| {
            state.set_locale(locale.to_string());
        });
    });

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => ThemeMode::Light,
            ThemeAction::Dark => ThemeMode::Dark,
        };
        Theme::change(mode, None, cx);
        update_app_state_and_save(cx, "theme", move |state, _| {
            state.set_theme(Some(mode));
        });
    });
}

fn main() {
    let _log_guard = init_tracing();
    info!("Starting Signup GUI...");

    let app_state = SignupAppState::try_load().unwrap_or_else(|e| {
        error!(error = %e, "Falling back to default settings");
        SignupAppState::new()
    });

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);
        register_actions(cx);

        if let Some(mode) = app_state.theme() {
            Theme::change(mode, None, cx);
        }

        let api = build_user_api(&app_state);
        let clear_on_failure = app_state.api().clear_fields_on_failure;
        let registration = cx.new(|_| RegistrationState::new(api, clear_on_failure));
        let app_state = cx.new(|_| app_state);
        cx.set_global(SignupGlobalStore::new(app_state, registration));

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(None, size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitleBar::title_bar_options()),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let view = cx.new(|cx| Workspace::new(window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
