//! Reusable TUI widgets.

pub mod form;
pub mod progress;
pub mod toast;

pub use form::{Form, draw_form};
pub use progress::{StepState, draw_progress, step_state};
pub use toast::{Toast, draw_toast};
