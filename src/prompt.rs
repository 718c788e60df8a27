//! Prompt builder
//!
//! Formats each profile into the instruction sent to the model. The layout
//! is fixed: section headings use `**Heading:**`, list items use `* item`,
//! which is the markup the result formatter understands. Indentation,
//! blank lines and trailing whitespace are part of the template.

use crate::profile::{PersonalProfile, PostureProfile};

/// Which recommendation a prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    Diet,
    Posture,
}

impl RecommendationKind {
    /// Noun phrase used in error text shown to the user
    pub fn subject(&self) -> &'static str {
        match self {
            RecommendationKind::Diet => "diet recommendation",
            RecommendationKind::Posture => "posture advice",
        }
    }
}

/// Build the diet prompt
pub fn diet_prompt(profile: &PersonalProfile) -> String {
    format!(
        concat!(
            "\n",
            "        Provide a professional diet recommendation with the following format:\n",
            "\n",
            "        **Daily Calorie Intake:**\n",
            "        * [specific calorie range] calories per day\n",
            "        \n",
            "        **Macronutrient Breakdown:**\n",
            "        * Protein: [range] grams ([explanation])\n",
            "        * Fat: [range] grams ([explanation])\n",
            "        * Carbohydrates: [range] grams ([explanation])\n",
            "        \n",
            "        **Meal Plan Examples:**\n",
            "        * Breakfast: [example 1], [example 2]\n",
            "        * Lunch: [example 1], [example 2] \n",
            "        * Dinner: [example 1], [example 2]\n",
            "        * Snacks: [example 1], [example 2]\n",
            "        \n",
            "        **Hydration:**\n",
            "        * [specific recommendation] liters per day\n",
            "        \n",
            "        **Supplement Suggestions:**\n",
            "        * [supplement 1]: [reason]\n",
            "        * [supplement 2]: [reason]\n",
            "        \n",
            "        **Additional Notes:**\n",
            "        * [important note 1]\n",
            "        * [important note 2]\n",
            "\n",
            "        Base this on:\n",
            "        Age: {age}\n",
            "        Gender: {gender}\n",
            "        Weight: {weight} kg\n",
            "        Height: {height} cm\n",
            "        Activity Level: {activity}\n",
            "        Dietary Restrictions: {restrictions}\n",
            "        Goals: {goals}\n",
            "        "
        ),
        age = profile.age,
        gender = profile.gender,
        weight = profile.weight,
        height = profile.height,
        activity = profile.activity_level,
        restrictions = profile.dietary_restriction,
        goals = profile.goal,
    )
}

/// Build the posture prompt
pub fn posture_prompt(profile: &PostureProfile) -> String {
    format!(
        concat!(
            "\n",
            "        Provide professional posture advice with the following format:\n",
            "\n",
            "        **Recommended Exercises:**\n",
            "        * [exercise 1]: [description]\n",
            "        * [exercise 2]: [description]\n",
            "        \n",
            "        **Ergonomic Adjustments:**\n",
            "        * [adjustment 1]\n",
            "        * [adjustment 2]\n",
            "        \n",
            "        **Frequency:**\n",
            "        * [recommended frequency]\n",
            "        \n",
            "        **Warning Signs:**\n",
            "        * [sign 1]\n",
            "        * [sign 2]\n",
            "        \n",
            "        **When to Seek Help:**\n",
            "        * [situation 1]\n",
            "        * [situation 2]\n",
            "\n",
            "        Base this on:\n",
            "        Posture Issues: {issues}\n",
            "        Duration: {duration}\n",
            "        Pain Location: {pain}\n",
            "        Work Environment: {work}\n",
            "        "
        ),
        issues = profile.issues,
        duration = profile.duration,
        pain = profile.pain_location,
        work = profile.work_environment,
    )
}

/// Build the prompt for `kind` from the matching profile
pub fn build(kind: RecommendationKind, personal: &PersonalProfile, posture: &PostureProfile) -> String {
    match kind {
        RecommendationKind::Diet => diet_prompt(personal),
        RecommendationKind::Posture => posture_prompt(posture),
    }
}
