use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::model::{FieldErrors, RegistrationRecord};

/// Outcome of a submission attempt.
///
/// On the wire: `{"success": bool, "message": string, "fieldErrors"?: {field: [string]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

impl SubmissionResponse {
    /// A successful submission with a confirmation message.
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            field_errors: None,
        }
    }

    /// A failed submission with no field-level detail.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            field_errors: None,
        }
    }

    /// Attaches field-level errors to a response.
    pub fn with_field_errors(mut self, errors: FieldErrors) -> Self {
        self.field_errors = Some(errors);
        self
    }
}

/// Accepts a completed registration and reports whether it was stored.
///
/// Called once per user-initiated submit. Implementations must not retry.
pub trait SubmissionHandler: Send + Sync {
    fn submit(
        &self,
        record: RegistrationRecord,
    ) -> impl Future<Output = SubmissionResponse> + Send;
}
