//! User List
//!
//! The display list: records returned by the backend, in arrival order.

use crate::assets::CustomIconName;
use crate::states::{RegisteredUser, current_locale, i18n_users};
use gpui::{App, SharedString, Window, div, prelude::*};
use gpui_component::{ActiveTheme, Icon, h_flex, label::Label, v_flex};
use rust_i18n::t;

const PASSWORD_MASK: &str = "••••••";

/// Display list of registered users
#[derive(IntoElement)]
pub struct UserList {
    users: Vec<RegisteredUser>,
}

impl UserList {
    pub fn new(users: Vec<RegisteredUser>) -> Self {
        Self { users }
    }

    fn render_row(ix: usize, user: &RegisteredUser, locale: &str, cx: &App) -> impl IntoElement {
        let record = &user.record;
        let id: SharedString = match &record.id {
            Some(id) => format!("#{id}").into(),
            None => i18n_users(cx, "no_id"),
        };
        let time = user.received_at.format("%H:%M:%S").to_string();
        let received = t!("users.received_at", locale = locale, time = time).to_string();
        let bg = if ix % 2 == 0 {
            cx.theme().background
        } else {
            cx.theme().secondary
        };

        h_flex()
            .id(("user-row", ix))
            .w_full()
            .px_3()
            .py_2()
            .gap_3()
            .bg(bg)
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .w(gpui::px(72.0))
                    .child(Label::new(id).text_xs().text_color(cx.theme().muted_foreground)),
            )
            .child(
                v_flex()
                    .flex_1()
                    .overflow_hidden()
                    .child(Label::new(record.name.clone()).text_sm())
                    .child(
                        Label::new(record.email.clone())
                            .text_xs()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
            .when(record.password.is_some(), |el| {
                el.child(Label::new(PASSWORD_MASK).text_xs().text_color(cx.theme().muted_foreground))
            })
            .child(Label::new(received).text_xs().text_color(cx.theme().muted_foreground))
    }
}

impl RenderOnce for UserList {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let locale = current_locale(cx);
        let count = self.users.len();

        v_flex()
            .w_full()
            .gap_2()
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(Icon::from(CustomIconName::Users).size_4())
                    .child(Label::new(i18n_users(cx, "title")))
                    .child(
                        Label::new(format!("({count})"))
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
            .child(
                v_flex()
                    .w_full()
                    .rounded_md()
                    .border_1()
                    .border_color(cx.theme().border)
                    .overflow_hidden()
                    .when(self.users.is_empty(), |el| {
                        el.p_4().items_center().child(
                            Label::new(i18n_users(cx, "empty"))
                                .text_sm()
                                .text_color(cx.theme().muted_foreground),
                        )
                    })
                    .children(
                        self.users
                            .iter()
                            .enumerate()
                            .map(|(ix, user)| Self::render_row(ix, user, &locale, cx)),
                    ),
            )
    }
}
