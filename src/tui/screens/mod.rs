//! TUI screen implementations.

pub mod confirmation;
pub mod help;
pub mod landing;
pub mod register;

pub use confirmation::{ConfirmationState, draw_confirmation};
pub use help::{HelpState, draw_help};
pub use landing::{LandingState, draw_landing};
pub use register::{RegisterState, draw_register};
