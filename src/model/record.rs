use serde::{Deserialize, Serialize};

use super::event::{Event, TicketType};
use super::field::{Field, FieldErrors};
use super::selection::Selection;
use super::validation::{
    ValidationError, validate_email, validate_first_name, validate_last_name, validate_phone,
};

/// A complete registration, as handed to a submission handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub event: Event,
    pub ticket_type: TicketType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_needs: Option<String>,
}

impl RegistrationRecord {
    /// Re-checks every text constraint.
    ///
    /// Enum fields are valid by construction; the text fields are public and
    /// may have been built without going through a draft.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let checks = [
            (Field::FirstName, validate_first_name(&self.first_name)),
            (Field::LastName, validate_last_name(&self.last_name)),
            (Field::Email, validate_email(&self.email)),
            (Field::Phone, validate_phone(&self.phone)),
        ];
        for (field, result) in checks {
            if let Err(e) = result {
                errors.push(field, e.to_string());
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// In-progress form values for one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub event: Selection<Event>,
    pub ticket_type: Selection<TicketType>,
    pub dietary_needs: String,
}

impl RegistrationDraft {
    /// Creates an empty draft with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a single field against its constraint.
    ///
    /// Optional fields always pass.
    pub fn validate_field(&self, field: Field) -> Result<(), ValidationError> {
        match field {
            Field::FirstName => validate_first_name(&self.first_name),
            Field::LastName => validate_last_name(&self.last_name),
            Field::Email => validate_email(&self.email),
            Field::Phone => validate_phone(&self.phone),
            Field::Event => self
                .event
                .is_selected()
                .then_some(())
                .ok_or(ValidationError::EventUnselected),
            Field::TicketType => self
                .ticket_type
                .is_selected()
                .then_some(())
                .ok_or(ValidationError::TicketTypeUnselected),
            Field::DietaryNeeds => Ok(()),
        }
    }

    /// Validates each of `fields`, collecting every failure.
    pub fn validate_fields(&self, fields: &[Field]) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for &field in fields {
            if let Err(e) = self.validate_field(field) {
                errors.push(field, e.to_string());
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Builds a [`RegistrationRecord`] if every required field is valid.
    ///
    /// An empty dietary note becomes `None`.
    pub fn to_record(&self) -> Result<RegistrationRecord, FieldErrors> {
        self.validate_fields(ALL_FIELDS)?;
        match (self.event.value(), self.ticket_type.value()) {
            (Some(event), Some(ticket_type)) => Ok(RegistrationRecord {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                event,
                ticket_type,
                dietary_needs: (!self.dietary_needs.is_empty())
                    .then(|| self.dietary_needs.clone()),
            }),
            // validate_fields already rejects unselected choices.
            _ => Err(FieldErrors::new()),
        }
    }

    /// Returns the text value of a typed field, or `None` for choice fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(self.first_name.as_str()),
            Field::LastName => Some(self.last_name.as_str()),
            Field::Email => Some(self.email.as_str()),
            Field::Phone => Some(self.phone.as_str()),
            Field::DietaryNeeds => Some(self.dietary_needs.as_str()),
            Field::Event | Field::TicketType => None,
        }
    }

    /// Returns a mutable handle to a typed field's text, or `None` for choice fields.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::DietaryNeeds => Some(&mut self.dietary_needs),
            Field::Event | Field::TicketType => None,
        }
    }

    /// Cycles a choice field's selection. Returns `false` for typed fields.
    pub fn cycle_choice(&mut self, field: Field, forward: bool) -> bool {
        match field {
            Field::Event => {
                self.event.cycle(Event::all(), forward);
                true
            }
            Field::TicketType => {
                self.ticket_type.cycle(TicketType::all(), forward);
                true
            }
            _ => false,
        }
    }

    /// Returns the display text for `field`: the typed value or the selected label.
    ///
    /// Empty when nothing has been entered or selected.
    pub fn display_value(&self, field: Field) -> &str {
        match field {
            Field::Event => self.event.value().map(|e| e.label()).unwrap_or(""),
            Field::TicketType => self.ticket_type.value().map(|t| t.label()).unwrap_or(""),
            _ => self.text(field).unwrap_or(""),
        }
    }
}

impl From<&RegistrationRecord> for RegistrationDraft {
    fn from(record: &RegistrationRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            event: Selection::Selected(record.event),
            ticket_type: Selection::Selected(record.ticket_type),
            dietary_needs: record.dietary_needs.clone().unwrap_or_default(),
        }
    }
}

/// Every record field, in form order.
pub const ALL_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::Event,
    Field::TicketType,
    Field::DietaryNeeds,
];
