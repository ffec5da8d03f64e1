//! Title Bar Component
//!
//! Custom title bar with the app name and a language/theme menu.

use crate::assets::CustomIconName;
use crate::states::{LocaleAction, SignupGlobalStore, ThemeAction, i18n_menu};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    Icon, IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};
use rust_i18n::t;

/// Title bar component
pub struct SignupTitleBar;

impl SignupTitleBar {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<SignupGlobalStore>().read(cx);
        let (locale, theme) = (store.locale(), store.theme());

        menu.label(i18n_menu(cx, "language"))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            .label(i18n_menu(cx, "theme"))
            .menu_with_check(
                i18n_menu(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_menu(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
    }
}

impl Render for SignupTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = t!("app.title", locale = cx.global::<SignupGlobalStore>().read(cx).locale()).to_string();

        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .gap_2()
                    .pl_4()
                    .child(Icon::from(CustomIconName::UserPlus).small())
                    .child(Label::new(title).text_sm()),
            )
            .child(
                h_flex().items_center().justify_end().px_2().mr_2().child(
                    Button::new("settings")
                        .tooltip(i18n_menu(cx, "settings"))
                        .icon(IconName::Settings2)
                        .small()
                        .ghost()
                        .dropdown_menu(move |menu, window, cx| Self::render_settings_menu(menu, window, cx))
                        .anchor(Corner::TopRight),
                ),
            )
    }
}
