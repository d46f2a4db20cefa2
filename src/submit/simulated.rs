use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::model::RegistrationRecord;

use super::handler::{SubmissionHandler, SubmissionResponse};

/// Message returned when the record fails server-side validation.
pub const INVALID_DATA_MESSAGE: &str = "Invalid data provided.";

/// Message returned when a storage failure is simulated.
pub const SERVER_ERROR_MESSAGE: &str =
    "Failed to save registration due to a server error. Please try again.";

/// Default artificial latency of a submission.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Stand-in backend: re-validates, logs the record, waits, then answers.
///
/// Nothing is stored. With `fail` set every valid submission is answered
/// with [`SERVER_ERROR_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedBackend {
    delay: Duration,
    fail: bool,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl SimulatedBackend {
    /// Creates a backend that always succeeds after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Makes every valid submission fail with a server error.
    pub fn failing(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }

    /// Returns the artificial latency.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns `true` if submissions are set to fail.
    pub fn is_failing(&self) -> bool {
        self.fail
    }
}

impl SubmissionHandler for SimulatedBackend {
    async fn submit(&self, record: RegistrationRecord) -> SubmissionResponse {
        if let Err(errors) = record.validate() {
            warn!(fields = ?errors.fields().collect::<Vec<_>>(), "rejected invalid registration");
            return SubmissionResponse::rejected(INVALID_DATA_MESSAGE).with_field_errors(errors);
        }

        info!(
            first_name = %record.first_name,
            last_name = %record.last_name,
            email = %record.email,
            event = record.event.id(),
            ticket_type = record.ticket_type.id(),
            dietary_needs = record.dietary_needs.as_deref().unwrap_or(""),
            "new registration submitted"
        );

        sleep(self.delay).await;

        if self.fail {
            warn!(email = %record.email, "simulated storage failure");
            return SubmissionResponse::rejected(SERVER_ERROR_MESSAGE);
        }

        SubmissionResponse::accepted(format!(
            "Thank you for registering, {}! A confirmation has been sent to your email.",
            record.first_name
        ))
    }
}
