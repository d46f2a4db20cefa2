use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Validation errors for registration fields.
///
/// The `Display` text is the message shown next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First name must be at least 2 characters.")]
    FirstNameTooShort,
    #[error("Last name must be at least 2 characters.")]
    LastNameTooShort,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Please select an event.")]
    EventUnselected,
    #[error("Please select a ticket type.")]
    TicketTypeUnselected,
}

/// Minimum length of a first or last name.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum length of a phone number.
pub const MIN_PHONE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("valid hardcoded regex")
});

/// Returns `true` if `value` is at least `min` characters long.
///
/// Counts Unicode scalar values, not bytes. No trimming.
fn has_min_len(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Validates a first name: at least [`MIN_NAME_LEN`] characters.
pub fn validate_first_name(name: &str) -> Result<(), ValidationError> {
    if has_min_len(name, MIN_NAME_LEN) {
        Ok(())
    } else {
        Err(ValidationError::FirstNameTooShort)
    }
}

/// Validates a last name: at least [`MIN_NAME_LEN`] characters.
pub fn validate_last_name(name: &str) -> Result<(), ValidationError> {
    if has_min_len(name, MIN_NAME_LEN) {
        Ok(())
    } else {
        Err(ValidationError::LastNameTooShort)
    }
}

/// Validates email syntax (e.g. `john.doe@example.com`).
///
/// The local part must not start with `.` or contain `..`; the rest is
/// enforced by the pattern.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a phone number: at least [`MIN_PHONE_LEN`] characters.
///
/// Formatting characters count towards the length, so `(123) 456-7890` passes.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if has_min_len(phone, MIN_PHONE_LEN) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- names ---

    #[test]
    fn first_name_two_chars() {
        assert_eq!(validate_first_name("Al"), Ok(()));
    }

    #[test]
    fn first_name_one_char() {
        assert_eq!(
            validate_first_name("A"),
            Err(ValidationError::FirstNameTooShort)
        );
    }

    #[test]
    fn first_name_empty() {
        assert_eq!(
            validate_first_name(""),
            Err(ValidationError::FirstNameTooShort)
        );
    }

    #[test]
    fn last_name_one_char() {
        assert_eq!(
            validate_last_name("D"),
            Err(ValidationError::LastNameTooShort)
        );
    }

    #[test]
    fn name_counts_chars_not_bytes() {
        // One scalar value, two bytes.
        assert_eq!(
            validate_last_name("é"),
            Err(ValidationError::LastNameTooShort)
        );
        assert_eq!(validate_last_name("Øy"), Ok(()));
    }

    #[test]
    fn name_whitespace_is_not_trimmed() {
        assert_eq!(validate_first_name("  "), Ok(()));
    }

    #[quickcheck]
    fn name_valid_iff_two_or_more_chars(s: String) -> bool {
        validate_first_name(&s).is_ok() == (s.chars().count() >= 2)
    }

    // --- email ---

    #[test]
    fn email_simple() {
        assert_eq!(validate_email("john.doe@example.com"), Ok(()));
    }

    #[test]
    fn email_plus_and_subdomain() {
        assert_eq!(validate_email("jane+events@mail.example.co.uk"), Ok(()));
    }

    #[test]
    fn email_uppercase() {
        assert_eq!(validate_email("JOHN@EXAMPLE.COM"), Ok(()));
    }

    #[test]
    fn email_missing_at() {
        assert_eq!(
            validate_email("john.example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_missing_tld() {
        assert_eq!(
            validate_email("john@example"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_single_letter_tld() {
        assert_eq!(
            validate_email("john@example.c"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_leading_dot() {
        assert_eq!(
            validate_email(".john@example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_double_dot() {
        assert_eq!(
            validate_email("john..doe@example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_trailing_dot_in_local_part() {
        assert_eq!(
            validate_email("john.@example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_with_space() {
        assert_eq!(
            validate_email("john doe@example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_letters_are_ascii_only() {
        // The long s and the Kelvin sign case-fold to ASCII letters under Unicode rules.
        assert_eq!(
            validate_email("\u{17F}@example.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("john@example.co\u{212A}"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("jos\u{E9}@example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[quickcheck]
    fn accepted_email_is_ascii(s: String) -> bool {
        validate_email(&s).is_err() || s.is_ascii()
    }

    #[test]
    fn email_empty() {
        assert_eq!(validate_email(""), Err(ValidationError::InvalidEmail));
    }

    #[quickcheck]
    fn email_without_at_always_rejected(s: String) -> bool {
        let s: String = s.chars().filter(|&c| c != '@').collect();
        validate_email(&s).is_err()
    }

    // --- phone ---

    #[test]
    fn phone_ten_digits() {
        assert_eq!(validate_phone("1234567890"), Ok(()));
    }

    #[test]
    fn phone_formatted() {
        assert_eq!(validate_phone("(123) 456-7890"), Ok(()));
    }

    #[test]
    fn phone_nine_digits() {
        assert_eq!(
            validate_phone("123456789"),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[quickcheck]
    fn phone_valid_iff_ten_or_more_chars(s: String) -> bool {
        validate_phone(&s).is_ok() == (s.chars().count() >= 10)
    }

    // --- messages ---

    #[test]
    fn messages_match_field_copy() {
        assert_eq!(
            ValidationError::FirstNameTooShort.to_string(),
            "First name must be at least 2 characters."
        );
        assert_eq!(
            ValidationError::EventUnselected.to_string(),
            "Please select an event."
        );
        assert_eq!(
            ValidationError::TicketTypeUnselected.to_string(),
            "Please select a ticket type."
        );
    }
}
