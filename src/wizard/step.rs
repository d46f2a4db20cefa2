use std::fmt;

use crate::model::Field;

/// One screen of the registration form.
///
/// Each step owns a disjoint subset of the record's fields; the final
/// [`Step::Review`] owns none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    PersonalDetails,
    EventChoices,
    Review,
}

static ALL_STEPS: &[Step] = &[Step::PersonalDetails, Step::EventChoices, Step::Review];

impl Step {
    /// Returns all steps in order.
    pub fn all() -> &'static [Step] {
        ALL_STEPS
    }

    /// Returns the step at `index`, if in range.
    pub fn at(index: usize) -> Option<Step> {
        ALL_STEPS.get(index).copied()
    }

    /// Returns the zero-based position of this step.
    pub fn index(self) -> usize {
        match self {
            Step::PersonalDetails => 0,
            Step::EventChoices => 1,
            Step::Review => 2,
        }
    }

    /// Returns the index of the final step.
    pub fn last_index() -> usize {
        ALL_STEPS.len() - 1
    }

    /// Returns the two-digit step number shown in the progress bar.
    pub fn id(self) -> &'static str {
        match self {
            Step::PersonalDetails => "01",
            Step::EventChoices => "02",
            Step::Review => "03",
        }
    }

    /// Returns the step title.
    pub fn name(self) -> &'static str {
        match self {
            Step::PersonalDetails => "Personal Details",
            Step::EventChoices => "Event Choices",
            Step::Review => "Review & Submit",
        }
    }

    /// Returns the fields this step validates before advancing.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::PersonalDetails => &[Field::FirstName, Field::LastName, Field::Email, Field::Phone],
            Step::EventChoices => &[Field::Event, Field::TicketType, Field::DietaryNeeds],
            Step::Review => &[],
        }
    }

    /// Returns the step that owns `field`.
    pub fn owning(field: Field) -> Step {
        ALL_STEPS
            .iter()
            .copied()
            .find(|step| step.fields().contains(&field))
            .unwrap_or(Step::Review)
    }

    /// Returns `true` for the step that submits.
    pub fn is_final(self) -> bool {
        self.index() == Self::last_index()
    }
}

#[mutants::skip]
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id(), self.name())
    }
}
