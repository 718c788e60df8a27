//! Recommendation client handed to the shell
//!
//! Wraps a `TextGenerator`, or the configuration error that prevented one
//! from being built. Every failure comes back as display text so the panes
//! always have something to show.

use std::sync::Arc;
use tracing::{info, warn};

use crate::cli::Config;
use crate::errors::AdvisorError;
use crate::models::client::{GeminiClient, TextGenerator};
use crate::prompt::RecommendationKind;

#[derive(Clone)]
enum Backend {
    Ready(Arc<dyn TextGenerator>),
    Unavailable(String),
}

/// Generates recommendation text from prompts
#[derive(Clone)]
pub struct Recommender {
    backend: Backend,
}

impl Recommender {
    /// Use an already-built generator
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            backend: Backend::Ready(generator),
        }
    }

    /// A recommender whose calls all fail with the given configuration error
    pub fn unavailable(error: AdvisorError) -> Self {
        Self {
            backend: Backend::Unavailable(error.to_string()),
        }
    }

    /// Build from configuration; a bad credential yields an unavailable recommender
    pub fn from_config(config: &Config) -> Self {
        match GeminiClient::from_config(config) {
            Ok(client) => {
                info!(model = client.model(), "recommendation client ready");
                Self::new(Arc::new(client))
            }
            Err(e) => {
                warn!(error = %e, "recommendations disabled");
                Self::unavailable(e)
            }
        }
    }

    /// Whether a generator is configured
    pub fn is_available(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    /// Configuration error, if generation is disabled
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.backend {
            Backend::Ready(_) => None,
            Backend::Unavailable(reason) => Some(reason),
        }
    }

    /// Send one prompt; errors come back as readable text
    pub async fn generate(&self, prompt: &str) -> Result<String, String> {
        match &self.backend {
            Backend::Ready(generator) => generator.generate(prompt).await.map_err(|e| e.to_string()),
            Backend::Unavailable(reason) => Err(reason.clone()),
        }
    }

    /// Produce the text shown for `kind`, substituting an error message on failure
    pub async fn recommend(&self, kind: RecommendationKind, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(kind = kind.subject(), error = %e, "generation failed");
                format!("Error generating {}: {}", kind.subject(), e)
            }
        }
    }
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.backend {
            Backend::Ready(_) => f.write_str("Recommender(ready)"),
            Backend::Unavailable(reason) => write!(f, "Recommender(unavailable: {})", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl TextGenerator for Echo {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("echo: {}", prompt))
        }
    }

    struct Failing;

    #[async_trait]
    impl TextGenerator for Failing {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(AdvisorError::ApiError {
                status: 429,
                message: "Quota exceeded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_generate_success() {
        let recommender = Recommender::new(Arc::new(Echo));
        assert!(recommender.is_available());
        assert_eq!(recommender.generate("hi").await, Ok("echo: hi".to_string()));
    }

    #[tokio::test]
    async fn test_recommend_failure_becomes_text() {
        let recommender = Recommender::new(Arc::new(Failing));
        let text = recommender.recommend(RecommendationKind::Diet, "p").await;
        assert!(text.starts_with("Error generating diet recommendation: "));
        assert!(text.contains("Quota exceeded"));

        let text = recommender.recommend(RecommendationKind::Posture, "p").await;
        assert!(text.starts_with("Error generating posture advice: "));
    }

    #[tokio::test]
    async fn test_unavailable_reports_config_error() {
        let recommender = Recommender::from_config(&Config::default());
        assert!(!recommender.is_available());
        assert!(recommender.unavailable_reason().unwrap().contains("credential"));

        let text = recommender.recommend(RecommendationKind::Diet, "p").await;
        assert!(text.starts_with("Error generating diet recommendation: Missing API credential"));
    }
}
