//! The step-wise registration state machine.
//!
//! A [`Wizard`] walks the [`Step`]s in order. Each step validates only the
//! fields it owns before letting the user continue; the final step hands the
//! whole record to a [`SubmissionHandler`](crate::submit::SubmissionHandler).

mod error;
mod machine;
mod step;

pub use error::WizardError;
pub use machine::{SubmissionStatus, Wizard};
pub use step::Step;
