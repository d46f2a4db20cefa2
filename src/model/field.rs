use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One field of a [`RegistrationRecord`](super::RegistrationRecord).
///
/// Serializes as the record's camelCase key, so it can key a
/// [`FieldErrors`] map on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Event,
    TicketType,
    DietaryNeeds,
}

impl Field {
    /// Returns the camelCase key used on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Event => "event",
            Field::TicketType => "ticketType",
            Field::DietaryNeeds => "dietaryNeeds",
        }
    }

    /// Returns the label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Event => "Select Event",
            Field::TicketType => "Ticket Type",
            Field::DietaryNeeds => "Dietary Needs (Optional)",
        }
    }

    /// Returns example input shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::FirstName => "John",
            Field::LastName => "Doe",
            Field::Email => "john.doe@example.com",
            Field::Phone => "(123) 456-7890",
            Field::Event => "Choose an event",
            Field::TicketType => "Select your ticket",
            Field::DietaryNeeds => "e.g., Vegetarian, Gluten-Free",
        }
    }

    /// Returns `true` if the field must pass validation before advancing.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::DietaryNeeds)
    }

    /// Returns `true` if the field is picked from a closed set rather than typed.
    pub fn is_choice(&self) -> bool {
        matches!(self, Field::Event | Field::TicketType)
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field-level error messages, keyed by field, in insertion order per field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, Vec<String>>);

impl FieldErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to `field`'s list.
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Returns the messages recorded for `field`, empty if none.
    pub fn get(&self, field: Field) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the first message for `field`, if any.
    pub fn first(&self, field: Field) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    /// Returns `true` if `field` has at least one message.
    pub fn contains(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    /// Removes every message for `field`.
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns `true` if no field has a message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the fields that have messages, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Replaces each field's messages with those in `other`.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.insert(field, messages);
        }
    }
}
