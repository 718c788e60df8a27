//! Health records and the form that collects them

pub mod collector;
pub mod types;

pub use collector::{FieldKind, FormField, InputForm, Section};
pub use types::{
    ActivityLevel, DietaryRestriction, Gender, Goal, PersonalProfile, PostureProfile,
    WorkEnvironment,
};
