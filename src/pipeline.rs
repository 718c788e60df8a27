//! Recommendation pipeline run on the worker task
//!
//! Builds both prompts from a form snapshot and asks the recommender for
//! each in turn: diet first, then posture. The two results are independent,
//! so a failure in one never affects the other.

use std::time::Instant;
use tracing::info;

use crate::models::Recommender;
use crate::profile::{PersonalProfile, PostureProfile};
use crate::prompt::{self, RecommendationKind};

/// Text for both output panes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendations {
    pub diet: String,
    pub posture: String,
}

impl Recommendations {
    /// Same message in both panes, used when the worker itself fails
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            diet: message.clone(),
            posture: message,
        }
    }
}

/// Run both requests sequentially
pub async fn run(
    personal: &PersonalProfile,
    posture: &PostureProfile,
    recommender: &Recommender,
) -> Recommendations {
    let start = Instant::now();

    let diet_prompt = prompt::build(RecommendationKind::Diet, personal, posture);
    let posture_prompt = prompt::build(RecommendationKind::Posture, personal, posture);

    let diet = recommender
        .recommend(RecommendationKind::Diet, &diet_prompt)
        .await;
    let posture = recommender
        .recommend(RecommendationKind::Posture, &posture_prompt)
        .await;

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "recommendations ready"
    );

    Recommendations { diet, posture }
}
