use crate::model::FieldErrors;

/// Errors from driving the registration state machine out of order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// Submit was requested before reaching the review step.
    #[error("registration can only be submitted from the review step")]
    NotOnFinalStep,

    /// A submission is already awaiting its response.
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    /// `finish_submit` was called with no submission in flight.
    #[error("no submission is in progress")]
    NotSubmitting,

    /// The full record failed validation at submit time.
    #[error("registration is incomplete")]
    Incomplete(FieldErrors),
}
