//! Registration State
//!
//! GPUI entity around [`RegistrationForm`]. Owns the user API handle, awaits
//! the create-request on the foreground executor and reports back through
//! [`UIEvent`]s.

use std::sync::Arc;

use gpui::{Context, EventEmitter};
use uuid::Uuid;

use crate::domain::{FormField, UserRecord};
use crate::error::SubmissionError;
use crate::services::UserApi;
use crate::states::{Notice, Notifier, RegistrationForm, UIEvent};

/// Registration state entity
pub struct RegistrationState {
    form: RegistrationForm,
    api: Arc<dyn UserApi>,
}

impl EventEmitter<UIEvent> for RegistrationState {}

impl RegistrationState {
    /// Create a new registration state
    pub fn new(api: Arc<dyn UserApi>, clear_on_failure: bool) -> Self {
        Self {
            form: RegistrationForm::new(clear_on_failure),
            api,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.form.is_submitting()
    }

    /// Mirror an input's value into the form
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Validate and send the registration
    pub fn submit(&mut self, cx: &mut Context<Self>) {
        let pending = match self.form.begin_submit(&mut EmitNotifier { cx }) {
            Ok(pending) => pending,
            Err(e) => {
                tracing::debug!(error = %e, "Submit not started");
                return;
            }
        };
        cx.notify();

        let api = self.api.clone();
        let ticket = pending.ticket;
        let user = pending.user;

        cx.spawn(async move |this, cx| {
            let result = api.create_user(user).await;
            let _ = this.update(cx, |this, cx| {
                this.finish(ticket, result, cx);
            });
        })
        .detach();
    }

    fn finish(
        &mut self,
        ticket: Uuid,
        result: Result<UserRecord, SubmissionError>,
        cx: &mut Context<Self>,
    ) {
        let outcome = self.form.complete(ticket, result, &mut EmitNotifier { cx });
        if outcome.fields_cleared() {
            cx.emit(UIEvent::FieldsCleared);
        }
        cx.notify();
    }
}

/// Turns notices into `UIEvent::Toast` emissions
struct EmitNotifier<'a, 'b> {
    cx: &'a mut Context<'b, RegistrationState>,
}

impl Notifier for EmitNotifier<'_, '_> {
    fn notify(&mut self, notice: Notice) {
        self.cx.emit(UIEvent::Toast { notice });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewUser, RecordId};
    use futures::channel::oneshot;
    use futures::future::BoxFuture;
    use gpui::{AppContext as _, Entity, TestAppContext};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Mutex;

    type Reply = Result<UserRecord, SubmissionError>;

    /// Records every request; each call waits for the test to release a reply
    #[derive(Default)]
    struct GatedApi {
        requests: Mutex<Vec<NewUser>>,
        replies: Mutex<Vec<oneshot::Sender<Reply>>>,
    }

    impl GatedApi {
        fn request_count(&self) -> usize {
            self.requests.lock().expect("requests lock").len()
        }

        fn reply(&self, reply: Reply) {
            let sender = self.replies.lock().expect("replies lock").remove(0);
            sender.send(reply).expect("request still waiting");
        }
    }

    impl UserApi for GatedApi {
        fn create_user(&self, user: NewUser) -> BoxFuture<'_, Reply> {
            let (tx, rx) = oneshot::channel();
            self.requests.lock().expect("requests lock").push(user);
            self.replies.lock().expect("replies lock").push(tx);
            Box::pin(async move {
                rx.await.unwrap_or_else(|_| {
                    Err(SubmissionError::Unavailable {
                        message: "reply dropped".to_string(),
                    })
                })
            })
        }
    }

    fn setup(
        cx: &mut TestAppContext,
        clear_on_failure: bool,
    ) -> (Arc<GatedApi>, Entity<RegistrationState>, Rc<RefCell<Vec<UIEvent>>>) {
        let api = Arc::new(GatedApi::default());
        let state = cx.new(|_| RegistrationState::new(api.clone(), clear_on_failure));
        let events = Rc::new(RefCell::new(Vec::new()));

        cx.update(|cx| {
            let events = events.clone();
            cx.subscribe(&state, move |_, event: &UIEvent, _| {
                events.borrow_mut().push(event.clone());
            })
            .detach();
        });

        (api, state, events)
    }

    fn fill_and_submit(cx: &mut TestAppContext, state: &Entity<RegistrationState>, name: &str) {
        state.update(cx, |state, cx| {
            state.set_field(FormField::Name, name);
            state.set_field(FormField::Email, "ada@example.com");
            state.set_field(FormField::Password, "secret");
            state.submit(cx);
        });
    }

    fn toast(notice: Notice) -> UIEvent {
        UIEvent::Toast { notice }
    }

    #[gpui::test]
    fn test_success_clears_inputs_and_appends(cx: &mut TestAppContext) {
        let (api, state, events) = setup(cx, false);

        fill_and_submit(cx, &state, "Ada");
        cx.run_until_parked();
        assert!(state.read_with(cx, |state, _| state.is_submitting()));
        assert_eq!(api.request_count(), 1);

        api.reply(Ok(UserRecord {
            id: Some(RecordId::Number(1)),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: Some("secret".to_string()),
            extra: Default::default(),
        }));
        cx.run_until_parked();

        state.read_with(cx, |state, _| {
            assert!(!state.is_submitting());
            assert_eq!(state.form().users().len(), 1);
            assert!(state.form().input().is_blank());
        });
        assert_eq!(
            *events.borrow(),
            vec![toast(Notice::Registered), UIEvent::FieldsCleared]
        );
    }

    #[gpui::test]
    fn test_failure_keeps_inputs_by_default(cx: &mut TestAppContext) {
        let (api, state, events) = setup(cx, false);

        fill_and_submit(cx, &state, "Ada");
        cx.run_until_parked();
        api.reply(Err(SubmissionError::Rejected {
            status: 500,
            body: "boom".to_string(),
        }));
        cx.run_until_parked();

        state.read_with(cx, |state, _| {
            assert!(state.form().users().is_empty());
            assert_eq!(state.form().field(FormField::Name), "Ada");
        });
        assert_eq!(
            *events.borrow(),
            vec![toast(Notice::SubmissionFailed {
                reason: "Server answered 500: boom".to_string()
            })]
        );
    }

    #[gpui::test]
    fn test_failure_clears_inputs_when_configured(cx: &mut TestAppContext) {
        let (api, state, events) = setup(cx, true);

        fill_and_submit(cx, &state, "Ada");
        cx.run_until_parked();
        api.reply(Err(SubmissionError::Unavailable {
            message: "offline".to_string(),
        }));
        cx.run_until_parked();

        assert!(events.borrow().contains(&UIEvent::FieldsCleared));
        assert!(state.read_with(cx, |state, _| state.form().input().is_blank()));
    }

    #[gpui::test]
    fn test_no_request_while_one_is_in_flight(cx: &mut TestAppContext) {
        let (api, state, events) = setup(cx, false);

        fill_and_submit(cx, &state, "Ada");
        fill_and_submit(cx, &state, "Ada again");
        cx.run_until_parked();

        assert_eq!(api.request_count(), 1);
        assert_eq!(*events.borrow(), vec![toast(Notice::InFlight)]);
        assert!(state.read_with(cx, |state, _| state.is_submitting()));
    }

    #[gpui::test]
    fn test_missing_field_sends_nothing(cx: &mut TestAppContext) {
        let (api, state, events) = setup(cx, false);

        fill_and_submit(cx, &state, "");
        cx.run_until_parked();

        assert_eq!(api.request_count(), 0);
        assert_eq!(*events.borrow(), vec![toast(Notice::MissingFields)]);
        assert!(!state.read_with(cx, |state, _| state.is_submitting()));
    }
}
