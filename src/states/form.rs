//! Registration Form Model
//!
//! The GPUI-free core of the registration flow: field values, the submit
//! phase and the display list of records returned by the backend.
//!
//! ```text
//! Idle ──begin_submit──▶ (validate) ──invalid──▶ Idle + MissingFields
//!                             │
//!                           valid
//!                             ▼
//!                        Submitting ──complete(Ok)──▶ Idle + append + clear
//!                                   └─complete(Err)─▶ Idle + SubmissionFailed
//! ```

use chrono::{DateTime, Local};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::{FormField, FormInput, NewUser, UserRecord};
use crate::error::{SubmissionError, SubmitBlocked};
use crate::states::{Notice, Notifier};

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// A create-request identified by `ticket` is in flight
    Submitting { ticket: Uuid },
}

/// A validated request waiting to be sent
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub ticket: Uuid,
    pub user: NewUser,
}

/// Result of applying a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record appended; fields were cleared
    Registered,
    /// Request failed; `cleared` tells whether the fields were emptied
    Failed { cleared: bool },
    /// Completion for a ticket that is not in flight; nothing changed
    Stale,
}

impl SubmitOutcome {
    pub fn fields_cleared(self) -> bool {
        matches!(self, SubmitOutcome::Registered | SubmitOutcome::Failed { cleared: true })
    }
}

/// An entry of the display list
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredUser {
    pub record: UserRecord,
    /// When the response arrived
    pub received_at: DateTime<Local>,
}

/// Registration form state machine
#[derive(Debug, Default)]
pub struct RegistrationForm {
    input: FormInput,
    phase: SubmitPhase,
    users: Vec<RegisteredUser>,
    clear_on_failure: bool,
}

impl RegistrationForm {
    /// Create an empty form
    ///
    /// `clear_on_failure` also empties the inputs when the request fails.
    pub fn new(clear_on_failure: bool) -> Self {
        Self {
            clear_on_failure,
            ..Self::default()
        }
    }

    // ==================== Getters ====================

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn field(&self, field: FormField) -> &str {
        self.input.get(field)
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting { .. })
    }

    /// Records returned by the backend, oldest first
    pub fn users(&self) -> &[RegisteredUser] {
        &self.users
    }

    // ==================== Transitions ====================

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.input.set(field, value);
    }

    /// Validate the inputs and enter `Submitting`
    ///
    /// No request may be sent unless this returns `Ok`.
    pub fn begin_submit(
        &mut self,
        notifier: &mut dyn Notifier,
    ) -> Result<PendingSubmission, SubmitBlocked> {
        if let SubmitPhase::Submitting { ticket } = self.phase {
            warn!(%ticket, "Submit ignored, registration already in flight");
            notifier.notify(Notice::InFlight);
            return Err(SubmitBlocked::InFlight);
        }

        let user = match self.input.capture() {
            Ok(user) => user,
            Err(source) => {
                debug!(error = %source, "Registration input incomplete");
                notifier.notify(Notice::MissingFields);
                return Err(SubmitBlocked::Incomplete { source });
            }
        };

        let ticket = Uuid::now_v7();
        self.phase = SubmitPhase::Submitting { ticket };
        info!(%ticket, email = %user.email, "Submitting registration");

        Ok(PendingSubmission { ticket, user })
    }

    /// Apply the result of the request started with `ticket`
    pub fn complete(
        &mut self,
        ticket: Uuid,
        result: Result<UserRecord, SubmissionError>,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        if self.phase != (SubmitPhase::Submitting { ticket }) {
            warn!(%ticket, phase = ?self.phase, "Dropping completion for a request not in flight");
            return SubmitOutcome::Stale;
        }
        self.phase = SubmitPhase::Idle;

        match result {
            Ok(record) => {
                info!(%ticket, id = ?record.id, "Registration accepted");
                notifier.notify(Notice::Registered);
                self.users.push(RegisteredUser {
                    record,
                    received_at: Local::now(),
                });
                self.input.clear();
                SubmitOutcome::Registered
            }
            Err(e) => {
                error!(%ticket, error = %e, "Registration request failed");
                notifier.notify(Notice::SubmissionFailed {
                    reason: e.to_string(),
                });
                if self.clear_on_failure {
                    self.input.clear();
                }
                SubmitOutcome::Failed {
                    cleared: self.clear_on_failure,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;

    #[derive(Default)]
    struct Recorder(Vec<Notice>);

    impl Notifier for Recorder {
        fn notify(&mut self, notice: Notice) {
            self.0.push(notice);
        }
    }

    fn fill(form: &mut RegistrationForm, name: &str, email: &str, password: &str) {
        form.set_field(FormField::Name, name);
        form.set_field(FormField::Email, email);
        form.set_field(FormField::Password, password);
    }

    fn record(id: i64, name: &str) -> UserRecord {
        UserRecord {
            id: Some(RecordId::Number(id)),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: Some("secret".to_string()),
            extra: Default::default(),
        }
    }

    fn rejected() -> SubmissionError {
        SubmissionError::Rejected {
            status: 500,
            body: "boom".to_string(),
        }
    }

    #[test]
    fn test_successful_registration() {
        let mut form = RegistrationForm::new(false);
        let mut notes = Recorder::default();
        fill(&mut form, "Ada", "ada@example.com", "secret");

        let pending = form.begin_submit(&mut notes).expect("valid input");
        assert_eq!(pending.user.name, "Ada");
        assert_eq!(pending.user.email, "ada@example.com");
        assert_eq!(pending.user.password, "secret");
        assert!(form.is_submitting());

        let returned: UserRecord = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","password":"secret","id":1}"#,
        )
        .expect("valid record");
        let outcome = form.complete(pending.ticket, Ok(returned.clone()), &mut notes);

        assert_eq!(outcome, SubmitOutcome::Registered);
        assert!(outcome.fields_cleared());
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.users().len(), 1);
        assert_eq!(form.users()[0].record, returned);
        assert!(form.input().is_blank());
        assert_eq!(notes.0, vec![Notice::Registered]);
    }

    #[test]
    fn test_empty_name_blocks_submit() {
        let mut form = RegistrationForm::new(false);
        let mut notes = Recorder::default();
        fill(&mut form, "", "ada@example.com", "secret");

        let result = form.begin_submit(&mut notes);
        assert!(matches!(result, Err(SubmitBlocked::Incomplete { .. })));
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(notes.0, vec![Notice::MissingFields]);
        assert_eq!(form.field(FormField::Name), "");
        assert_eq!(form.field(FormField::Email), "ada@example.com");
        assert_eq!(form.field(FormField::Password), "secret");
    }

    #[test]
    fn test_every_missing_field_blocks_submit() {
        for field in FormField::ALL {
            let mut form = RegistrationForm::new(false);
            let mut notes = Recorder::default();
            fill(&mut form, "Ada", "ada@example.com", "secret");
            form.set_field(field, "");

            assert!(form.begin_submit(&mut notes).is_err(), "{field} empty");
            assert!(!form.is_submitting());
        }
    }

    #[test]
    fn test_second_submit_while_in_flight() {
        let mut form = RegistrationForm::new(false);
        let mut notes = Recorder::default();
        fill(&mut form, "Ada", "ada@example.com", "secret");

        let first = form.begin_submit(&mut notes).expect("valid input");
        let second = form.begin_submit(&mut notes);
        assert!(matches!(second, Err(SubmitBlocked::InFlight)));
        assert_eq!(form.phase(), SubmitPhase::Submitting { ticket: first.ticket });
        assert_eq!(notes.0, vec![Notice::InFlight]);
    }

    #[test]
    fn test_failed_request_keeps_list_and_fields() {
        let mut form = RegistrationForm::new(false);
        let mut notes = Recorder::default();
        fill(&mut form, "Ada", "ada@example.com", "secret");
        let pending = form.begin_submit(&mut notes).expect("valid input");

        let outcome = form.complete(pending.ticket, Err(rejected()), &mut notes);

        assert_eq!(outcome, SubmitOutcome::Failed { cleared: false });
        assert!(form.users().is_empty());
        assert_eq!(form.field(FormField::Name), "Ada");
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(
            notes.0,
            vec![Notice::SubmissionFailed {
                reason: "Server answered 500: boom".to_string()
            }]
        );
    }

    #[test]
    fn test_failed_request_clears_when_configured() {
        let mut form = RegistrationForm::new(true);
        let mut notes = Recorder::default();
        fill(&mut form, "Ada", "ada@example.com", "secret");
        let pending = form.begin_submit(&mut notes).expect("valid input");

        let outcome = form.complete(pending.ticket, Err(rejected()), &mut notes);

        assert_eq!(outcome, SubmitOutcome::Failed { cleared: true });
        assert!(outcome.fields_cleared());
        assert!(form.users().is_empty());
        assert!(form.input().is_blank());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut form = RegistrationForm::new(false);
        let mut notes = Recorder::default();

        for (id, name) in [(1, "Ada"), (2, "Grace"), (3, "Linus")] {
            fill(&mut form, name, "x@example.com", "pw");
            let pending = form.begin_submit(&mut notes).expect("valid input");
            form.complete(pending.ticket, Ok(record(id, name)), &mut notes);
        }

        fill(&mut form, "Ken", "ken@example.com", "pw");
        let pending = form.begin_submit(&mut notes).expect("valid input");
        form.complete(pending.ticket, Err(rejected()), &mut notes);

        let ids: Vec<_> = form
            .users()
            .iter()
            .map(|u| u.record.id.clone())
            .collect();
        assert_eq!(
            ids,
            vec![
                Some(RecordId::Number(1)),
                Some(RecordId::Number(2)),
                Some(RecordId::Number(3)),
            ]
        );
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut form = RegistrationForm::new(false);
        let mut notes = Recorder::default();

        let outcome = form.complete(Uuid::now_v7(), Ok(record(9, "Ghost")), &mut notes);
        assert_eq!(outcome, SubmitOutcome::Stale);
        assert!(!outcome.fields_cleared());

        fill(&mut form, "Ada", "ada@example.com", "secret");
        let pending = form.begin_submit(&mut notes).expect("valid input");
        let outcome = form.complete(Uuid::now_v7(), Ok(record(9, "Ghost")), &mut notes);
        assert_eq!(outcome, SubmitOutcome::Stale);
        assert_eq!(form.phase(), SubmitPhase::Submitting { ticket: pending.ticket });
        assert!(form.users().is_empty());
        assert!(notes.0.is_empty());
    }
}
