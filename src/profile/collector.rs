//! Input collector
//!
//! Holds the editable form controls and reads them into the two profile
//! records. Text fields pass through untouched; choice fields store the
//! selected option label, or the typed text when the list allows "Other".

use crate::errors::{AdvisorError, Result};
use crate::profile::types::{
    ActivityLevel, DietaryRestriction, Gender, Goal, PersonalProfile, PostureProfile,
    WorkEnvironment,
};

/// Form section a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Personal,
    Posture,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Personal => "Personal Information",
            Section::Posture => "Posture Information",
        }
    }
}

/// Control type behind a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text entry
    Text,
    /// Drop-down list; `allows_other` enables free text for the "Other" entry
    Choice {
        options: &'static [&'static str],
        allows_other: bool,
    },
}

/// One bound control
#[derive(Debug, Clone)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    fn text(key: &'static str, label: &'static str, section: Section) -> Self {
        Self {
            key,
            label,
            section,
            kind: FieldKind::Text,
            value: String::new(),
        }
    }

    fn choice(
        key: &'static str,
        label: &'static str,
        section: Section,
        options: &'static [&'static str],
        allows_other: bool,
    ) -> Self {
        Self {
            key,
            label,
            section,
            kind: FieldKind::Choice {
                options,
                allows_other,
            },
            value: options[0].to_string(),
        }
    }

    /// Current control value
    pub fn value(&self) -> &str {
        &self.value
    }

    fn assign(&mut self, input: &str) -> Result<()> {
        match &self.kind {
            FieldKind::Text => {
                self.value = input.to_string();
                Ok(())
            }
            FieldKind::Choice {
                options,
                allows_other,
            } => {
                let trimmed = input.trim();
                let by_index = trimmed
                    .parse::<usize>()
                    .ok()
                    .filter(|i| *i >= 1 && *i <= options.len())
                    .map(|i| options[i - 1]);
                let by_label = options
                    .iter()
                    .copied()
                    .find(|label| label.eq_ignore_ascii_case(trimmed));

                match by_index.or(by_label) {
                    Some(label) => {
                        self.value = label.to_string();
                        Ok(())
                    }
                    None if *allows_other => {
                        self.value = trimmed.to_string();
                        Ok(())
                    }
                    None => Err(AdvisorError::InvalidOption {
                        field: self.key.to_string(),
                        value: input.to_string(),
                        options: options.join(", "),
                    }),
                }
            }
        }
    }
}

/// The full input form: personal fields followed by posture fields
#[derive(Debug, Clone)]
pub struct InputForm {
    fields: Vec<FormField>,
}

impl InputForm {
    /// Create the form with every control at its default
    pub fn new() -> Self {
        use Section::*;

        let fields = vec![
            FormField::text("age", "Age:", Personal),
            FormField::choice("gender", "Gender:", Personal, Gender::OPTIONS, false),
            FormField::text("weight", "Weight (kg):", Personal),
            FormField::text("height", "Height (cm):", Personal),
            FormField::choice(
                "activity_level",
                "Activity Level:",
                Personal,
                ActivityLevel::OPTIONS,
                false,
            ),
            FormField::choice(
                "dietary_restrictions",
                "Dietary Restrictions:",
                Personal,
                DietaryRestriction::OPTIONS,
                true,
            ),
            FormField::choice("goals", "Goals:", Personal, Goal::OPTIONS, true),
            FormField::text("issues", "Posture Issues:", Posture),
            FormField::text("duration", "Duration:", Posture),
            FormField::text("pain_location", "Pain Location:", Posture),
            FormField::choice(
                "work_environment",
                "Work Environment:",
                Posture,
                WorkEnvironment::OPTIONS,
                true,
            ),
        ];

        Self { fields }
    }

    /// All fields in display order
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Look up a field by key
    pub fn field(&self, key: &str) -> Result<&FormField> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| AdvisorError::UnknownField(key.to_string()))
    }

    /// Current value of a field
    pub fn get(&self, key: &str) -> Result<&str> {
        Ok(self.field(key)?.value())
    }

    /// Set a field from user input
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.key == key)
            .ok_or_else(|| AdvisorError::UnknownField(key.to_string()))?;
        field.assign(value)
    }

    fn value_of(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Read the personal record
    pub fn personal_profile(&self) -> PersonalProfile {
        PersonalProfile {
            age: self.value_of("age").to_string(),
            gender: Gender::from_label(self.value_of("gender")).unwrap_or_default(),
            weight: self.value_of("weight").to_string(),
            height: self.value_of("height").to_string(),
            activity_level: ActivityLevel::from_label(self.value_of("activity_level"))
                .unwrap_or_default(),
            dietary_restriction: DietaryRestriction::from_label(
                self.value_of("dietary_restrictions"),
            ),
            goal: Goal::from_label(self.value_of("goals")),
        }
    }

    /// Read the posture record
    pub fn posture_profile(&self) -> PostureProfile {
        PostureProfile {
            issues: self.value_of("issues").to_string(),
            duration: self.value_of("duration").to_string(),
            pain_location: self.value_of("pain_location").to_string(),
            work_environment: WorkEnvironment::from_label(self.value_of("work_environment")),
        }
    }

    /// Read both records
    pub fn collect(&self) -> (PersonalProfile, PostureProfile) {
        (self.personal_profile(), self.posture_profile())
    }
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new()
    }
}
