//! Personal and posture records
//!
//! Both records are rebuilt from the form on every submission and dropped
//! once the recommendations are rendered. Values are carried verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolve user input against an option list.
///
/// Accepts a label (case-insensitive) or a 1-based index into `options`.
fn match_option(input: &str, options: &[&'static str]) -> Option<usize> {
    let trimmed = input.trim();
    if let Ok(index) = trimmed.parse::<usize>() {
        if index >= 1 && index <= options.len() {
            return Some(index - 1);
        }
    }
    options
        .iter()
        .position(|label| label.eq_ignore_ascii_case(trimmed))
}

/// Gender selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const OPTIONS: &'static [&'static str] = &["Male", "Female", "Other"];

    /// Parse a label or 1-based option index
    pub fn from_label(input: &str) -> Option<Self> {
        match match_option(input, Self::OPTIONS)? {
            0 => Some(Gender::Male),
            1 => Some(Gender::Female),
            _ => Some(Gender::Other),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Weekly activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const OPTIONS: &'static [&'static str] =
        &["Sedentary", "Light", "Moderate", "Active", "Very Active"];

    /// Parse a label or 1-based option index
    pub fn from_label(input: &str) -> Option<Self> {
        match match_option(input, Self::OPTIONS)? {
            0 => Some(ActivityLevel::Sedentary),
            1 => Some(ActivityLevel::Light),
            2 => Some(ActivityLevel::Moderate),
            3 => Some(ActivityLevel::Active),
            _ => Some(ActivityLevel::VeryActive),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::OPTIONS[*self as usize])
    }
}

/// Dietary restriction, with a free-text escape hatch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DietaryRestriction {
    #[default]
    None,
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    Other(String),
}

impl DietaryRestriction {
    pub const OPTIONS: &'static [&'static str] = &[
        "None",
        "Vegetarian",
        "Vegan",
        "Gluten-free",
        "Dairy-free",
        "Other",
    ];

    /// Parse a label or index; unmatched text becomes `Other(text)`
    pub fn from_label(input: &str) -> Self {
        match match_option(input, Self::OPTIONS) {
            Some(0) => DietaryRestriction::None,
            Some(1) => DietaryRestriction::Vegetarian,
            Some(2) => DietaryRestriction::Vegan,
            Some(3) => DietaryRestriction::GlutenFree,
            Some(4) => DietaryRestriction::DairyFree,
            Some(_) => DietaryRestriction::Other(String::new()),
            None => DietaryRestriction::Other(input.trim().to_string()),
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietaryRestriction::None => f.write_str("None"),
            DietaryRestriction::Vegetarian => f.write_str("Vegetarian"),
            DietaryRestriction::Vegan => f.write_str("Vegan"),
            DietaryRestriction::GlutenFree => f.write_str("Gluten-free"),
            DietaryRestriction::DairyFree => f.write_str("Dairy-free"),
            DietaryRestriction::Other(text) => write_other(f, text),
        }
    }
}

/// Health goal, with a free-text escape hatch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Goal {
    #[default]
    WeightLoss,
    MuscleGain,
    GeneralHealth,
    ImprovedFitness,
    Other(String),
}

impl Goal {
    pub const OPTIONS: &'static [&'static str] = &[
        "Weight loss",
        "Muscle gain",
        "General health",
        "Improved fitness",
        "Other",
    ];

    /// Parse a label or index; unmatched text becomes `Other(text)`
    pub fn from_label(input: &str) -> Self {
        match match_option(input, Self::OPTIONS) {
            Some(0) => Goal::WeightLoss,
            Some(1) => Goal::MuscleGain,
            Some(2) => Goal::GeneralHealth,
            Some(3) => Goal::ImprovedFitness,
            Some(_) => Goal::Other(String::new()),
            None => Goal::Other(input.trim().to_string()),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::WeightLoss => f.write_str("Weight loss"),
            Goal::MuscleGain => f.write_str("Muscle gain"),
            Goal::GeneralHealth => f.write_str("General health"),
            Goal::ImprovedFitness => f.write_str("Improved fitness"),
            Goal::Other(text) => write_other(f, text),
        }
    }
}

/// Work environment, with a free-text escape hatch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkEnvironment {
    #[default]
    OfficeDeskJob,
    RemoteWork,
    ManualLabor,
    Healthcare,
    Education,
    Other(String),
}

impl WorkEnvironment {
    pub const OPTIONS: &'static [&'static str] = &[
        "Office Desk Job",
        "Remote Work",
        "Manual Labor",
        "Healthcare",
        "Education",
        "Other",
    ];

    /// Parse a label or index; unmatched text becomes `Other(text)`
    pub fn from_label(input: &str) -> Self {
        match match_option(input, Self::OPTIONS) {
            Some(0) => WorkEnvironment::OfficeDeskJob,
            Some(1) => WorkEnvironment::RemoteWork,
            Some(2) => WorkEnvironment::ManualLabor,
            Some(3) => WorkEnvironment::Healthcare,
            Some(4) => WorkEnvironment::Education,
            Some(_) => WorkEnvironment::Other(String::new()),
            None => WorkEnvironment::Other(input.trim().to_string()),
        }
    }
}

impl fmt::Display for WorkEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkEnvironment::OfficeDeskJob => f.write_str("Office Desk Job"),
            WorkEnvironment::RemoteWork => f.write_str("Remote Work"),
            WorkEnvironment::ManualLabor => f.write_str("Manual Labor"),
            WorkEnvironment::Healthcare => f.write_str("Healthcare"),
            WorkEnvironment::Education => f.write_str("Education"),
            WorkEnvironment::Other(text) => write_other(f, text),
        }
    }
}

fn write_other(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if text.is_empty() {
        f.write_str("Other")
    } else {
        f.write_str(text)
    }
}

/// Personal information feeding the diet prompt
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonalProfile {
    pub age: String,
    pub gender: Gender,
    /// Kilograms, as typed
    pub weight: String,
    /// Centimetres, as typed
    pub height: String,
    pub activity_level: ActivityLevel,
    pub dietary_restriction: DietaryRestriction,
    pub goal: Goal,
}

/// Posture information feeding the posture prompt
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostureProfile {
    pub issues: String,
    pub duration: String,
    pub pain_location: String,
    pub work_environment: WorkEnvironment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_options() {
        assert_eq!(ActivityLevel::VeryActive.to_string(), "Very Active");
        assert_eq!(DietaryRestriction::GlutenFree.to_string(), "Gluten-free");
        assert_eq!(Goal::GeneralHealth.to_string(), "General health");
        assert_eq!(WorkEnvironment::ManualLabor.to_string(), "Manual Labor");
    }

    #[test]
    fn test_from_label_case_insensitive_and_index() {
        assert_eq!(Gender::from_label("female"), Some(Gender::Female));
        assert_eq!(Gender::from_label("3"), Some(Gender::Other));
        assert_eq!(Gender::from_label("robot"), None);
        assert_eq!(ActivityLevel::from_label("very active"), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::from_label("0"), None);
    }

    #[test]
    fn test_free_text_other() {
        assert_eq!(
            Goal::from_label("Run a marathon"),
            Goal::Other("Run a marathon".to_string())
        );
        assert_eq!(Goal::Other("Run a marathon".to_string()).to_string(), "Run a marathon");
        assert_eq!(DietaryRestriction::from_label("Other").to_string(), "Other");
        assert_eq!(
            WorkEnvironment::from_label(" Retail "),
            WorkEnvironment::Other("Retail".to_string())
        );
    }

    #[test]
    fn test_defaults_are_first_options() {
        let personal = PersonalProfile::default();
        assert_eq!(personal.gender.to_string(), Gender::OPTIONS[0]);
        assert_eq!(personal.activity_level.to_string(), ActivityLevel::OPTIONS[0]);
        assert_eq!(personal.dietary_restriction.to_string(), DietaryRestriction::OPTIONS[0]);
        assert_eq!(personal.goal.to_string(), Goal::OPTIONS[0]);
        assert_eq!(
            PostureProfile::default().work_environment.to_string(),
            WorkEnvironment::OPTIONS[0]
        );
    }
}
