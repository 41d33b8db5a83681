//! Integration tests for OllamaGenerator.
//!
//! Uses wiremock for HTTP mocking. Covers the /api/generate request shape,
//! status and body failure mapping, timeouts, the /api/tags probe, and a full
//! controller run over HTTP.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hackjudge::core::controller::{EvaluationController, SubmitOutcome};
use hackjudge::core::types::IdeaSubmission;
use hackjudge::evaluator::normalize::NormalizeMode;
use hackjudge::infra::config::InferenceConfig;
use hackjudge::infra::errors::{ErrorKind, HackJudgeError};
use hackjudge::provider::ollama::OllamaGenerator;
use hackjudge::provider::TextGenerator;

fn generator_for(server: &MockServer) -> OllamaGenerator {
    OllamaGenerator::new(Some(server.uri()), "qwen3:8b")
}

#[tokio::test]
async fn test_generate_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({
            "model": "qwen3:8b",
            "prompt": "judge this",
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "qwen3:8b",
            "response": "{\"score\":\"50/100\"}",
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = generator_for(&server)
        .generate("judge this")
        .await
        .expect("generate failed");
    assert_eq!(text, "{\"score\":\"50/100\"}");
}

#[tokio::test]
async fn test_generate_empty_response_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "" })))
        .mount(&server)
        .await;

    let text = generator_for(&server).generate("p").await.unwrap();
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_generate_server_error_is_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate("p").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.is_retriable());
    assert!(err.to_string().contains("model crashed"));
}

#[tokio::test]
async fn test_generate_not_found_is_network_not_retriable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "model 'qwen3:8b' not found"})),
        )
        .mount(&server)
        .await;

    let err = generator_for(&server).generate("p").await.unwrap_err();
    assert!(matches!(err, HackJudgeError::Network { retriable: false, .. }));
}

#[tokio::test]
async fn test_generate_missing_response_field_is_protocol() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "done": true })))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate("p").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_generate_non_string_response_is_protocol() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": 42 })))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate("p").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_generate_non_json_body_is_protocol() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate("p").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_generate_timeout_is_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": "late" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = InferenceConfig {
        endpoint: server.uri(),
        model: "qwen3:8b".into(),
        timeout_ms: 50,
    };
    let err = OllamaGenerator::from_config(&config)
        .generate("p")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.is_retriable());
}

#[tokio::test]
async fn test_probe_lists_models() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                { "name": "qwen3:8b", "size": 5_200_000_000u64 },
                { "name": "llama3.3:latest" }
            ]
        })))
        .mount(&server)
        .await;

    let models = generator_for(&server).probe().await.unwrap();
    assert_eq!(models, vec!["qwen3:8b", "llama3.3:latest"]);
    assert!(OllamaGenerator::has_model(&models, "llama3.3"));
}

#[tokio::test]
async fn test_probe_unreachable() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let err = OllamaGenerator::new(Some(uri), "qwen3:8b")
        .probe()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}

// ─── Controller over HTTP ───────────────────────────────────────

#[tokio::test]
async fn test_controller_end_to_end() {
    let server = MockServer::start().await;

    let reply = "<think>hmm</think>\n```json\n{\"score\":\"61/100\",\"impression\":\"Fine.\",\
                 \"strengths\":[\"x\"],\"risks\":[\"y\"],\"weakness\":\"z\",\"improvement\":\"w\",\
                 \"title_suggestions\":{\"high_score_variations\":[\"A\"]}}\n```";
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": reply })))
        .mount(&server)
        .await;

    let controller =
        EvaluationController::new(Arc::new(generator_for(&server)), NormalizeMode::Strict);
    let outcome = controller
        .submit(IdeaSubmission::new("GridShare", "Social Impact", "Solar"))
        .await;

    let SubmitOutcome::Succeeded(eval) = outcome else {
        panic!("expected success");
    };
    assert_eq!(eval.score_value(), Some(61));
    assert_eq!(eval.title_suggestions.high_score_variations, vec!["A"]);
    assert!(eval.title_suggestions.theme_aligned_variations.is_empty());
}

#[tokio::test]
async fn test_controller_http_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let controller =
        EvaluationController::new(Arc::new(generator_for(&server)), NormalizeMode::Strict);
    let outcome = controller.submit(IdeaSubmission::default()).await;

    assert_eq!(outcome, SubmitOutcome::Failed(ErrorKind::Network));
}
