use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::model::{Field, FieldErrors, RegistrationDraft, RegistrationRecord};
use crate::submit::{SubmissionHandler, SubmissionResponse};

use super::error::WizardError;
use super::step::Step;

/// Where the current registration attempt stands with the submission handler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Nothing submitted yet, or the last outcome was dismissed.
    #[default]
    Idle,
    /// Waiting on the handler; submit is disabled.
    Submitting,
    /// The handler accepted the record; carries its confirmation message.
    Succeeded(String),
    /// The handler rejected the record; carries its message.
    Failed(String),
}

/// The multi-step registration form state machine.
///
/// Owns the field values for the lifetime of one registration attempt.
/// Forward navigation is gated on the current step's fields; backward
/// navigation is not.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: usize,
    draft: RegistrationDraft,
    errors: FieldErrors,
    /// Fields that have been through a step or submit validation.
    checked: BTreeSet<Field>,
    status: SubmissionStatus,
}

impl Wizard {
    /// Creates a wizard on the first step with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current step.
    pub fn step(&self) -> Step {
        Step::at(self.step).unwrap_or(Step::Review)
    }

    /// Returns the zero-based index of the current step.
    pub fn step_index(&self) -> usize {
        self.step
    }

    /// Returns the current field values.
    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Returns the field errors from the most recent validation.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the submission status.
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Returns `true` while a submission awaits its response.
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Appends a character to a typed field.
    pub fn push_char(&mut self, field: Field, ch: char) {
        if let Some(text) = self.draft.text_mut(field) {
            text.push(ch);
            self.revalidate_if_flagged(field);
        }
    }

    /// Removes the last character of a typed field.
    pub fn pop_char(&mut self, field: Field) {
        if let Some(text) = self.draft.text_mut(field) {
            text.pop();
            self.revalidate_if_flagged(field);
        }
    }

    /// Replaces a typed field's value.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        if let Some(text) = self.draft.text_mut(field) {
            *text = value.into();
            self.revalidate_if_flagged(field);
        }
    }

    /// Moves a choice field to its next or previous option.
    pub fn cycle_choice(&mut self, field: Field, forward: bool) {
        if self.draft.cycle_choice(field, forward) {
            self.revalidate_if_flagged(field);
        }
    }

    /// Re-checks `field` once it has been validated or is showing an error.
    ///
    /// Fields never validated stay quiet while the user types. After that
    /// every edit re-checks, so a fixed field that breaks again is flagged again.
    fn revalidate_if_flagged(&mut self, field: Field) {
        if !self.checked.contains(&field) && !self.errors.contains(field) {
            return;
        }
        self.errors.clear_field(field);
        if let Err(e) = self.draft.validate_field(field) {
            self.errors.push(field, e.to_string());
        }
    }

    /// Validates the current step's fields and moves forward if they pass.
    ///
    /// On failure the step is unchanged and the errors are both recorded and
    /// returned. On the final step this is a no-op that returns the step.
    pub fn advance(&mut self) -> Result<Step, FieldErrors> {
        let step = self.step();
        for &field in step.fields() {
            self.errors.clear_field(field);
            self.checked.insert(field);
        }
        if let Err(errors) = self.draft.validate_fields(step.fields()) {
            debug!(step = %step, fields = ?errors.fields().collect::<Vec<_>>(), "step validation failed");
            self.errors.merge(errors.clone());
            return Err(errors);
        }
        self.step = (self.step + 1).min(Step::last_index());
        let next = self.step();
        if next != step {
            info!(from = %step, to = %next, "advanced");
        }
        Ok(next)
    }

    /// Moves back one step without validating. Clamped at the first step.
    pub fn retreat(&mut self) -> Step {
        self.step = self.step.saturating_sub(1);
        self.step()
    }

    /// Validates the whole record and marks the submission as in flight.
    ///
    /// Returns the record to hand to a [`SubmissionHandler`]. If validation
    /// fails, the wizard jumps back to the earliest step with an invalid field.
    pub fn begin_submit(&mut self) -> Result<RegistrationRecord, WizardError> {
        if self.is_submitting() {
            return Err(WizardError::SubmissionInFlight);
        }
        if !self.step().is_final() {
            return Err(WizardError::NotOnFinalStep);
        }
        let record = match self.draft.to_record() {
            Ok(record) => record,
            Err(errors) => {
                let earliest = errors
                    .fields()
                    .map(|field| Step::owning(field).index())
                    .min()
                    .unwrap_or(0);
                warn!(step = earliest, "incomplete registration at submit");
                self.checked.extend(errors.fields());
                self.step = earliest;
                self.errors.merge(errors.clone());
                return Err(WizardError::Incomplete(errors));
            }
        };
        self.errors.clear();
        self.status = SubmissionStatus::Submitting;
        info!(email = %record.email, "submitting registration");
        Ok(record)
    }

    /// Applies the handler's response to an in-flight submission.
    ///
    /// Success clears the form and returns to the first step; failure keeps
    /// every value for a retry.
    pub fn finish_submit(
        &mut self,
        response: SubmissionResponse,
    ) -> Result<&SubmissionStatus, WizardError> {
        if !self.is_submitting() {
            return Err(WizardError::NotSubmitting);
        }
        if response.success {
            info!("registration accepted");
            self.draft = RegistrationDraft::new();
            self.errors.clear();
            self.checked.clear();
            self.step = 0;
            self.status = SubmissionStatus::Succeeded(response.message);
        } else {
            warn!(message = %response.message, "registration rejected");
            if let Some(errors) = response.field_errors {
                self.errors.merge(errors);
            }
            self.status = SubmissionStatus::Failed(response.message);
        }
        Ok(&self.status)
    }

    /// Submits the record to `handler` and waits for the outcome.
    pub async fn submit<H: SubmissionHandler>(
        &mut self,
        handler: &H,
    ) -> Result<&SubmissionStatus, WizardError> {
        let record = self.begin_submit()?;
        let response = handler.submit(record).await;
        self.finish_submit(response)
    }

    /// Dismisses a finished submission's outcome, returning to [`SubmissionStatus::Idle`].
    pub fn acknowledge(&mut self) {
        if !self.is_submitting() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Discards all values, errors and progress.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
