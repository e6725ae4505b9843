//! Contact form state machine and its submission seam.

use crate::error::Error;

/// The three visitor-editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Checks that every field is filled in and the email looks deliverable.
    ///
    /// # Errors
    /// Returns [`Error::Form`] naming the first offending field.
    pub fn validate(&self) -> Result<(), Error> {
        for (field, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.trim().is_empty() {
                return Err(Error::missing_field(field));
            }
        }

        if !is_plausible_email(self.email.trim()) {
            return Err(Error::invalid_email(&self.email));
        }

        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
        && !email.chars().any(char::is_whitespace)
}

/// Submission lifecycle of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Editable; the submit button is enabled.
    #[default]
    Idle,
    /// A submission is in flight; inputs and button are disabled.
    Submitting,
}

/// Result reported by a [`ContactTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed(String),
}

/// Delivers a validated draft somewhere.
///
/// Implementations call `done` exactly once, possibly later from a timer or
/// promise callback.
pub trait ContactTransport {
    fn send(&self, draft: ContactDraft, done: Box<dyn FnOnce(SubmitOutcome)>);
}

/// Visitor-facing contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    phase: FormPhase,
}

impl ContactForm {
    /// Confirmation shown after a message reached the configured endpoint.
    pub const CONFIRMATION: &'static str = "Message sent! Thanks for reaching out.";
    /// Confirmation shown by the simulated transport.
    pub const DEMO_CONFIRMATION: &'static str = "Message sent! (This is a demo)";
    /// Delay of the simulated transport, in milliseconds.
    pub const SIMULATED_DELAY_MS: u32 = 1500;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Updates a field; ignored while submitting.
    pub fn edit(&mut self, f: impl FnOnce(&mut ContactDraft)) {
        if self.phase == FormPhase::Idle {
            f(&mut self.draft);
        }
    }

    /// Moves to `Submitting` and hands out the draft to send.
    ///
    /// # Errors
    /// Fails without changing state if a submission is already in flight or
    /// the draft does not validate.
    pub fn submit(&mut self) -> Result<ContactDraft, Error> {
        if self.is_submitting() {
            return Err(Error::already_submitting());
        }

        self.draft.validate()?;
        self.phase = FormPhase::Submitting;
        tracing::debug!("contact form submitting");

        Ok(self.draft.clone())
    }

    /// Completes the in-flight submission.
    ///
    /// On delivery all fields reset; on failure they are kept for a retry.
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        if !self.is_submitting() {
            return;
        }

        self.phase = FormPhase::Idle;
        match outcome {
            SubmitOutcome::Delivered => {
                self.draft = ContactDraft::default();
                tracing::info!("contact message delivered");
            },
            SubmitOutcome::Failed(reason) => {
                tracing::warn!(%reason, "contact message failed");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(|d| {
            d.name = "Ada".into();
            d.email = "ada@example.com".into();
            d.message = "Hello \"there\"\n".into();
        });
        form
    }

    /// Holds the completion callback until the test releases it.
    #[derive(Default)]
    struct ManualTransport {
        pending: RefCell<Option<Box<dyn FnOnce(SubmitOutcome)>>>,
    }

    impl ContactTransport for ManualTransport {
        fn send(&self, _draft: ContactDraft, done: Box<dyn FnOnce(SubmitOutcome)>) {
            *self.pending.borrow_mut() = Some(done);
        }
    }

    #[test]
    fn submit_cycle_resets_fields_and_blocks_double_submit() {
        let form = Rc::new(RefCell::new(filled()));
        let transport = ManualTransport::default();

        let draft = form.borrow_mut().submit().unwrap();
        assert_eq!(form.borrow().phase(), FormPhase::Submitting);
        assert!(form.borrow_mut().submit().is_err());

        let handle = form.clone();
        transport.send(draft, Box::new(move |outcome| handle.borrow_mut().finish(&outcome)));
        assert!(form.borrow().is_submitting());

        let done = transport.pending.borrow_mut().take().unwrap();
        done(SubmitOutcome::Delivered);

        let form = form.borrow();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.draft(), &ContactDraft::default());
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        form.submit().unwrap();
        form.finish(&SubmitOutcome::Failed("offline".into()));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut form = filled();
        form.submit().unwrap();
        form.edit(|d| d.name.clear());
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn validation_rejects_incomplete_drafts() {
        let mut form = ContactForm::new();
        assert!(matches!(form.submit(), Err(Error::Form(_))));
        assert_eq!(form.phase(), FormPhase::Idle);

        form.edit(|d| {
            d.name = "  ".into();
            d.email = "a@b.io".into();
            d.message = "hi".into();
        });
        assert!(form.submit().is_err());

        form.edit(|d| {
            d.name = "Ada".into();
            d.email = "not-an-email".into();
        });
        assert!(form.submit().is_err());
    }

    #[test]
    fn email_heuristic() {
        assert!(is_plausible_email("farooq@dev.io"));
        assert!(!is_plausible_email("@dev.io"));
        assert!(!is_plausible_email("farooq@dev"));
        assert!(!is_plausible_email("farooq@dev..io"));
        assert!(!is_plausible_email("far ooq@dev.io"));
    }
}
