mod event;
mod field;
mod record;
mod selection;
mod validation;

pub use event::{Event, TicketType};
pub use field::{Field, FieldErrors};
pub use record::{ALL_FIELDS, RegistrationDraft, RegistrationRecord};
pub use selection::Selection;
pub use validation::{
    MIN_NAME_LEN, MIN_PHONE_LEN, ValidationError, validate_email, validate_first_name,
    validate_last_name, validate_phone,
};
