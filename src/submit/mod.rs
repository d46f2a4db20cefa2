//! Submission handlers: the boundary a completed registration is handed to.

mod handler;
mod simulated;

pub use handler::{SubmissionHandler, SubmissionResponse};
pub use simulated::{
    DEFAULT_DELAY, INVALID_DATA_MESSAGE, SERVER_ERROR_MESSAGE, SimulatedBackend,
};
