use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// An event that attendees can register for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    #[serde(rename = "tech-conference-2024")]
    TechConference2024,
    #[serde(rename = "design-summit-2024")]
    DesignSummit2024,
    #[serde(rename = "product-expo-2024")]
    ProductExpo2024,
}

static ALL_EVENTS: &[Event] = &[
    Event::TechConference2024,
    Event::DesignSummit2024,
    Event::ProductExpo2024,
];

impl Event {
    /// Returns the wire identifier of this event.
    pub fn id(&self) -> &'static str {
        match self {
            Event::TechConference2024 => "tech-conference-2024",
            Event::DesignSummit2024 => "design-summit-2024",
            Event::ProductExpo2024 => "product-expo-2024",
        }
    }

    /// Returns the human-readable name shown in selectors and on review.
    pub fn label(&self) -> &'static str {
        match self {
            Event::TechConference2024 => "Tech Conference 2024",
            Event::DesignSummit2024 => "Design Summit 2024",
            Event::ProductExpo2024 => "Product Expo 2024",
        }
    }

    /// Returns all events in display order.
    pub fn all() -> &'static [Event] {
        ALL_EVENTS
    }
}

impl FromStr for Event {
    type Err = ValidationError;

    /// Parses a wire identifier. Matching is exact: no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_EVENTS
            .iter()
            .copied()
            .find(|e| e.id() == s)
            .ok_or(ValidationError::EventUnselected)
    }
}

#[mutants::skip]
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Admission tier for a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    General,
    Vip,
    Student,
}

static ALL_TICKET_TYPES: &[TicketType] =
    &[TicketType::General, TicketType::Vip, TicketType::Student];

impl TicketType {
    /// Returns the wire identifier of this ticket type.
    pub fn id(&self) -> &'static str {
        match self {
            TicketType::General => "general",
            TicketType::Vip => "vip",
            TicketType::Student => "student",
        }
    }

    /// Returns the human-readable name shown in selectors and on review.
    pub fn label(&self) -> &'static str {
        match self {
            TicketType::General => "General Admission",
            TicketType::Vip => "VIP Access",
            TicketType::Student => "Student",
        }
    }

    /// Returns all ticket types in display order.
    pub fn all() -> &'static [TicketType] {
        ALL_TICKET_TYPES
    }
}

impl FromStr for TicketType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_TICKET_TYPES
            .iter()
            .copied()
            .find(|t| t.id() == s)
            .ok_or(ValidationError::TicketTypeUnselected)
    }
}

#[mutants::skip]
impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
