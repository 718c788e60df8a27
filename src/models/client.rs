//! Gemini text-generation client
//!
//! Sends one prompt per call to `POST {base}/models/{model}:generateContent`
//! and returns the reply text. Single attempt, no retry.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cli::Config;
use crate::errors::{AdvisorError, Result};
use crate::models::types::{ErrorEnvelope, GenerateRequest, GenerateResponse, ModelInfo};

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// Anything that turns a prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// HTTP client for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a client against the default endpoint and model
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_MODEL, api_key, Duration::from_secs(60))
    }

    /// Create a client with custom configuration
    pub fn with_config(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AdvisorError::HttpError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.trim_start_matches("models/").to_string(),
            api_key: api_key.to_string(),
            timeout,
        })
    }

    /// Build a client from loaded configuration, checking the credential
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.credential()?;
        Self::with_config(
            &config.model.base_url,
            config.model_id(),
            api_key,
            Duration::from_secs(config.model.request_timeout_secs),
        )
    }

    fn url(&self, suffix: &str) -> String {
        format!(
            "{}/models/{}{}?key={}",
            self.base_url, self.model, suffix, self.api_key
        )
    }

    fn map_transport(&self, err: reqwest::Error) -> AdvisorError {
        if err.is_timeout() {
            AdvisorError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
        } else {
            // Drop the URL so the key never reaches the screen
            AdvisorError::HttpError(err.without_url())
        }
    }

    /// Send one prompt and return the first candidate's text, all parts joined
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest::from_prompt(prompt);
        debug!(model = %self.model, prompt_len = prompt.len(), "sending generateContent");

        let response = self
            .client
            .post(self.url(":generateContent"))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_transport(e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "generation request failed");
            return Err(api_error(status.as_u16(), &body));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;

        if let Some(error) = parsed.error.as_ref() {
            return Err(AdvisorError::ApiError {
                status: error.code,
                message: error.message.clone(),
            });
        }

        if let Some(text) = parsed.candidate_text() {
            debug!(reply_len = text.len(), "received reply");
            return Ok(text);
        }

        let reason = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
            .or_else(|| parsed.candidates.first().and_then(|c| c.finish_reason.clone()))
            .unwrap_or_else(|| "no candidates".to_string());
        Err(AdvisorError::EmptyResponse(reason))
    }

    /// Confirm the configured model exists and the key is accepted
    pub async fn check_model(&self) -> Result<ModelInfo> {
        let response = self
            .client
            .get(self.url(""))
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_transport(e))?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Get current model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt).await
    }
}

/// Turn an error reply into an `ApiError`, preferring the service's message
fn api_error(status: u16, body: &str) -> AdvisorError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                body.trim().to_string()
            }
        });
    AdvisorError::ApiError { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new("test-key").unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_model_prefix_normalised() {
        let client = GeminiClient::with_config(
            "http://localhost:8080/v1beta/",
            "models/gemini-2.0-flash-lite",
            "k",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.model(), "gemini-2.0-flash-lite");
        assert_eq!(
            client.url(":generateContent"),
            "http://localhost:8080/v1beta/models/gemini-2.0-flash-lite:generateContent?key=k"
        );
    }

    #[test]
    fn test_from_config_requires_credential() {
        let config = Config::default();
        assert!(matches!(
            GeminiClient::from_config(&config),
            Err(AdvisorError::MissingCredential(_))
        ));
    }

    #[test]
    fn test_api_error_prefers_service_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        match api_error(400, body) {
            AdvisorError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        match api_error(502, "") {
            AdvisorError::ApiError { message, .. } => assert_eq!(message, "Unknown error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
