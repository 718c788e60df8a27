//! Gemini client tests against a mock HTTP server

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use health_advisor::{
    cli::Config,
    models::{GeminiClient, Recommender, TextGenerator},
    prompt::RecommendationKind,
    AdvisorError,
};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash-lite:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::with_config(
        &format!("{}/v1beta", server.uri()),
        "models/gemini-2.0-flash-lite",
        "test-key",
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_generate_returns_first_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(body_json(json!({
            "contents": [{ "parts": [{ "text": "hello" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "**Frequency:**\n* Twice daily" }]
                },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let text = client.generate("hello").await.unwrap();
    assert_eq!(text, "**Frequency:**\n* Twice daily");
}

#[tokio::test]
async fn test_reply_split_across_parts_is_joined() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "**Daily Calorie Intake:**\n" },
                        { "text": "* 2200 calories per day" }
                    ]
                },
                "finishReason": "STOP"
            }]
        })))
        .mount(&server)
        .await;

    let text = client_for(&server).generate("hello").await.unwrap();
    assert_eq!(text, "**Daily Calorie Intake:**\n* 2200 calories per day");
}

#[tokio::test]
async fn test_slow_reply_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "candidates": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::with_config(
        &format!("{}/v1beta", server.uri()),
        "gemini-2.0-flash-lite",
        "test-key",
        Duration::from_secs(1),
    )
    .unwrap();

    match client.generate("hello").await {
        Err(AdvisorError::Timeout { duration_ms }) => assert_eq!(duration_ms, 1000),
        other => panic!("expected Timeout, got {:?}", other),
    }

    let recommender = Recommender::new(Arc::new(client));
    let text = recommender
        .recommend(RecommendationKind::Diet, "hello")
        .await;
    assert!(text.starts_with("Error generating diet recommendation: "));
    assert!(text.contains("timed out"));
}

#[tokio::test]
async fn test_connection_refused_hides_key() {
    let client = GeminiClient::with_config(
        "http://127.0.0.1:1/v1beta",
        "gemini-2.0-flash-lite",
        "secret-key-4321",
        Duration::from_secs(5),
    )
    .unwrap();

    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, AdvisorError::HttpError(_)));
    assert!(!err.to_string().contains("secret-key-4321"));

    let text = Recommender::new(Arc::new(client))
        .recommend(RecommendationKind::Posture, "hello")
        .await;
    assert!(text.starts_with("Error generating posture advice: "));
    assert!(!text.contains("secret-key-4321"));
}

#[tokio::test]
async fn test_error_envelope_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.generate("hello").await {
        Err(AdvisorError::ApiError { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.starts_with("API key not valid"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_blocked_prompt_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.generate("hello").await {
        Err(AdvisorError::EmptyResponse(reason)) => assert_eq!(reason, "SAFETY"),
        other => panic!("expected EmptyResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_recommender_wraps_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.model.base_url = format!("{}/v1beta", server.uri());
    config.model.api_key = Some("test-key".to_string());

    let recommender = Recommender::from_config(&config);
    assert!(recommender.is_available());

    let text = recommender
        .recommend(RecommendationKind::Diet, "hello")
        .await;
    assert!(text.starts_with("Error generating diet recommendation: "));
    assert!(text.contains("internal"));
}

#[tokio::test]
async fn test_check_model() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models/gemini-2.0-flash-lite"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/gemini-2.0-flash-lite",
            "displayName": "Gemini 2.0 Flash-Lite"
        })))
        .mount(&server)
        .await;

    let info = client_for(&server).check_model().await.unwrap();
    assert_eq!(info.name, "models/gemini-2.0-flash-lite");
    assert_eq!(info.display_name.as_deref(), Some("Gemini 2.0 Flash-Lite"));
}

#[test]
fn test_placeholder_key_disables_recommender() {
    let mut config = Config::default();
    config.model.api_key = Some("api_key".to_string());

    let recommender = Recommender::from_config(&config);
    assert!(!recommender.is_available());
    assert!(recommender
        .unavailable_reason()
        .unwrap()
        .contains("placeholder"));
}
