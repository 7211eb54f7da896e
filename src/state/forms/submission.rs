//! Submission controller: validate, report, reset

use super::field::{FieldKey, FieldValue, ProductType};
use super::form_state::{AppointmentForm, FormError};
use super::messages::collect_messages;
use super::snapshot::{Snapshot, SummaryRow};
use super::validators::ValidationContext;
use crate::clock::Clock;
use crate::state::reference::ReferenceData;
use chrono::NaiveDate;

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Editing,
    SubmittedInvalid,
    SubmittedValid,
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Messages in declared field order; never empty
    Rejected(Vec<String>),
    Accepted(Snapshot),
}

/// Presentation-side receiver of submit results. Calls are fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Called with a non-empty, ordered list of messages
    fn validation_failed(&mut self, messages: &[String]);

    /// Called with the pre-formatted confirmation rows
    fn submission_succeeded(&mut self, summary: &[SummaryRow]);

    /// Ask the presentation layer to show the terms and conditions
    fn terms_requested(&mut self);
}

/// Owns the form for one session and drives it through edits, submits and resets
pub struct SubmissionController {
    form: AppointmentForm,
    clock: Box<dyn Clock>,
    reference: &'static ReferenceData,
    phase: Phase,
}

impl SubmissionController {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self::with_reference(clock, ReferenceData::spanish())
    }

    pub fn with_reference(clock: Box<dyn Clock>, reference: &'static ReferenceData) -> Self {
        let ctx = ValidationContext::new(reference, clock.today());
        Self {
            form: AppointmentForm::new(&ctx),
            clock,
            reference,
            phase: Phase::Idle,
        }
    }

    /// Fresh context: the clock is read on every call
    fn context(&self) -> ValidationContext<'static> {
        ValidationContext::new(self.reference, self.clock.today())
    }

    pub fn form(&self) -> &AppointmentForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn reference(&self) -> &'static ReferenceData {
        self.reference
    }

    /// First date the date field accepts, for input hints
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.context().tomorrow()
    }

    /// Apply a user edit to a field
    pub fn edit(&mut self, key: FieldKey, value: FieldValue) -> Result<(), FormError> {
        let ctx = self.context();
        self.form.set_value(key, value, &ctx)?;
        self.phase = Phase::Editing;
        Ok(())
    }

    /// Apply a user edit addressed by raw field key
    pub fn edit_named(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let ctx = self.context();
        self.form.set_named(name, value, &ctx)?;
        self.phase = Phase::Editing;
        Ok(())
    }

    /// The user left a field
    pub fn touch(&mut self, key: FieldKey) {
        self.form.mark_touched(key);
    }

    /// Validate every field and report the outcome to `notifier`
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> SubmissionOutcome {
        let ctx = self.context();
        self.form.mark_submitted();

        if self.form.validate_all(&ctx) {
            self.phase = Phase::SubmittedValid;
            let snapshot = self.form.snapshot();
            let product = self
                .form
                .value(FieldKey::ProductType)
                .as_choice()
                .map(ProductType::key);
            tracing::info!(product = ?product, "appointment request accepted");
            notifier.submission_succeeded(&snapshot.summary());
            SubmissionOutcome::Accepted(snapshot)
        } else {
            self.phase = Phase::SubmittedInvalid;
            let messages = collect_messages(&self.form);
            tracing::info!(errors = messages.len(), "appointment request rejected");
            notifier.validation_failed(&messages);
            SubmissionOutcome::Rejected(messages)
        }
    }

    /// Back to defaults and the initial phase
    pub fn reset(&mut self) {
        let ctx = self.context();
        self.form.reset(&ctx);
        self.phase = Phase::Idle;
        tracing::info!("form reset");
    }

    pub fn request_terms(&self, notifier: &mut dyn Notifier) {
        notifier.terms_requested();
    }
}
