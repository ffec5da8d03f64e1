//! Workspace
//!
//! Top-level view: title bar above the registration view, with the
//! notification layer on top.

use crate::states::SignupGlobalStore;
use crate::views::{RegistrationView, SignupTitleBar};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*};
use gpui_component::{ActiveTheme, Root, v_flex};

/// Main window content
pub struct Workspace {
    title_bar: Entity<SignupTitleBar>,
    registration_view: Entity<RegistrationView>,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| SignupTitleBar::new(window, cx));
        let registration_view = cx.new(|cx| RegistrationView::new(window, cx));

        // Locale and theme changes re-render everything
        let app_state = cx.global::<SignupGlobalStore>().app_state();
        let subscriptions = vec![cx.observe(&app_state, |_this, _model, cx| cx.notify())];

        Self {
            title_bar,
            registration_view,
            _subscriptions: subscriptions,
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.registration_view.clone()),
            )
            .children(Root::render_notification_layer(window, cx))
    }
}
