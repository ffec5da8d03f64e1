//! Registration View
//!
//! The form itself: three inputs, a submit button and the display list
//! below it. Notices from [`RegistrationState`] become window notifications.

use crate::assets::CustomIconName;
use crate::constants::FORM_MAX_WIDTH;
use crate::domain::FormField;
use crate::helpers::{FormAction, SUBMIT_KEYSTROKE, humanize_keystroke};
use crate::states::{
    NotificationSeverity, RegistrationState, SignupGlobalStore, UIEvent, current_locale, i18n_form,
};
use crate::views::UserList;
use gpui::{
    App, Context, Entity, FontWeight, SharedString, Subscription, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Disableable, Icon, Sizable, WindowExt,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    notification::Notification,
    v_flex,
};
use rust_i18n::t;

/// Plain Enter submits. The input propagates the secondary chord, which
/// then reaches the global `FormAction::Submit` binding.
fn submits_on(event: &InputEvent) -> bool {
    matches!(event, InputEvent::PressEnter { secondary: false })
}

/// Registration form view
pub struct RegistrationView {
    registration: Entity<RegistrationState>,
    name_input: Entity<InputState>,
    email_input: Entity<InputState>,
    password_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl RegistrationView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let registration = cx.global::<SignupGlobalStore>().registration();
        let mut subscriptions = Vec::new();

        let name_input = Self::new_input(FormField::Name, window, cx);
        let email_input = Self::new_input(FormField::Email, window, cx);
        let password_input = Self::new_input(FormField::Password, window, cx);

        for input in [&name_input, &email_input, &password_input] {
            subscriptions.push(cx.subscribe(input, |this, _state, event, cx| {
                if submits_on(event) {
                    this.submit(cx);
                }
            }));
        }

        subscriptions.push(cx.subscribe_in(
            &registration,
            window,
            |this, _state, event: &UIEvent, window, cx| match event {
                UIEvent::Toast { notice } => {
                    let message = notice.message(&current_locale(cx));
                    let notification = match notice.severity() {
                        NotificationSeverity::Success => Notification::success(message),
                        NotificationSeverity::Warning => Notification::warning(message),
                        NotificationSeverity::Error => Notification::error(message),
                    };
                    window.push_notification(notification, cx);
                }
                UIEvent::FieldsCleared => this.clear_inputs(window, cx),
            },
        ));

        subscriptions.push(cx.observe(&registration, |_this, _model, cx| cx.notify()));

        Self {
            registration,
            name_input,
            email_input,
            password_input,
            _subscriptions: subscriptions,
        }
    }

    fn new_input(field: FormField, window: &mut Window, cx: &mut Context<Self>) -> Entity<InputState> {
        let placeholder = i18n_form(cx, &format!("{}_placeholder", field.key()));
        cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(placeholder)
                .masked(field == FormField::Password)
        })
    }

    fn input(&self, field: FormField) -> &Entity<InputState> {
        match field {
            FormField::Name => &self.name_input,
            FormField::Email => &self.email_input,
            FormField::Password => &self.password_input,
        }
    }

    /// Capture the widgets' current values and hand them to the form
    fn submit(&mut self, cx: &mut Context<Self>) {
        let values: Vec<(FormField, String)> = FormField::ALL
            .into_iter()
            .map(|field| (field, self.input(field).read(cx).value().to_string()))
            .collect();

        self.registration.update(cx, |state, cx| {
            for (field, value) in values {
                state.set_field(field, value);
            }
            state.submit(cx);
        });
    }

    fn clear_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        for field in FormField::ALL {
            self.input(field)
                .update(cx, |state, cx| state.set_value("", window, cx));
        }
    }

    fn render_field(&self, field: FormField, locked: bool, cx: &App) -> impl IntoElement {
        v_flex()
            .w_full()
            .gap_1()
            .child(
                Label::new(i18n_form(cx, &format!("{}_label", field.key())))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(Input::new(self.input(field)).disabled(locked))
    }

    fn render_header(&self, cx: &App) -> impl IntoElement {
        v_flex()
            .w_full()
            .items_center()
            .gap_2()
            .child(
                Icon::from(CustomIconName::UserPlus)
                    .size_8()
                    .text_color(cx.theme().primary),
            )
            .child(
                Label::new(i18n_form(cx, "heading"))
                    .text_2xl()
                    .font_weight(FontWeight::BOLD),
            )
            .child(
                div()
                    .text_sm()
                    .text_center()
                    .text_color(cx.theme().muted_foreground)
                    .child(i18n_form(cx, "description")),
            )
    }
}

impl Render for RegistrationView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (submitting, users) = {
            let registration = self.registration.read(cx);
            (registration.is_submitting(), registration.form().users().to_vec())
        };

        let locale = current_locale(cx);
        let hint = t!(
            "form.shortcut_hint",
            locale = &locale,
            keys = humanize_keystroke(SUBMIT_KEYSTROKE)
        )
        .to_string();
        let submit_label: SharedString = if submitting {
            i18n_form(cx, "submitting")
        } else {
            i18n_form(cx, "submit")
        };

        let form = v_flex()
            .w_full()
            .gap_4()
            .p_6()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().secondary)
            .children(FormField::ALL.map(|field| self.render_field(field, submitting, cx)))
            .child(
                h_flex()
                    .w_full()
                    .justify_between()
                    .items_center()
                    .child(
                        Label::new(hint)
                            .text_xs()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        Button::new("register")
                            .primary()
                            .large()
                            .label(submit_label)
                            .loading(submitting)
                            .disabled(submitting)
                            .on_click(cx.listener(|this, _, _window, cx| this.submit(cx))),
                    ),
            );

        v_flex()
            .id("registration")
            .size_full()
            .overflow_y_scroll()
            .items_center()
            .py_8()
            .px_4()
            .on_action(cx.listener(|this, _: &FormAction, _window, cx| this.submit(cx)))
            .child(
                v_flex()
                    .w_full()
                    .max_w(px(FORM_MAX_WIDTH))
                    .gap_6()
                    .child(self.render_header(cx))
                    .child(form)
                    .child(UserList::new(users)),
            )
    }
}
