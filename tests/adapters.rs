//! HTTP adapters against a local mock server.

use landing_builder::config::Config;
use landing_builder::orchestrator::Orchestrator;
use landing_builder::provider::{
    chat::ChatCompletionAdapter, gemini::CandidatePartsAdapter, generic::GenericAdapter,
    AdapterError, ProviderAdapter, ResponseShape,
};
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = "HTML_CODE_START\n<h1>Widget</h1>\nHTML_CODE_END\nCSS_CODE_START\nh1{}\nCSS_CODE_END";

fn chat_reply(text: &str) -> serde_json::Value {
    json!({"choices": [{"index": 0, "message": {"role": "assistant", "content": text}}]})
}

fn candidate_reply(text: &str) -> serde_json::Value {
    json!({"candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]})
}

#[tokio::test]
async fn chat_adapter_sends_model_and_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({"model": "deepseek/deepseek-chat", "messages": [{"role": "user", "content": "hello"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("hi there")))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = ChatCompletionAdapter::new(
        reqwest::Client::new(), "deepseek/deepseek-chat".into(), Some("sk-test".into()), server.uri(),
    );
    assert_eq!(adapter.complete("hello").await.unwrap(), "hi there");
}

#[tokio::test]
async fn chat_adapter_without_key_never_calls_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let adapter = ChatCompletionAdapter::new(reqwest::Client::new(), "m".into(), None, server.uri());
    assert!(matches!(adapter.complete("x").await, Err(AdapterError::MissingCredential("OPENROUTER_API_KEY"))));
}

#[tokio::test]
async fn gemini_adapter_reads_first_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "g-key"))
        .and(body_partial_json(json!({"contents": [{"parts": [{"text": "hello"}]}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply("generated")))
        .mount(&server)
        .await;

    let adapter = CandidatePartsAdapter::new(
        reqwest::Client::new(), "gemini-2.0-flash".into(), Some("g-key".into()), server.uri(),
    );
    assert_eq!(adapter.shape(), ResponseShape::CandidateParts);
    assert_eq!(adapter.complete("hello").await.unwrap(), "generated");
}

#[tokio::test]
async fn non_2xx_is_a_status_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let adapter = CandidatePartsAdapter::new(reqwest::Client::new(), "m".into(), Some("k".into()), server.uri());
    match adapter.complete("x").await {
        Err(AdapterError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_envelope_is_a_shape_mismatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply("wrong family")))
        .mount(&server)
        .await;

    let adapter = ChatCompletionAdapter::new(reqwest::Client::new(), "m".into(), Some("k".into()), server.uri());
    assert!(matches!(adapter.complete("x").await, Err(AdapterError::ShapeMismatch(_))));
}

#[tokio::test]
async fn generic_adapter_posts_prompt_and_decodes_configured_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .and(body_partial_json(json!({"model": "local/llama", "prompt": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply("from generic")))
        .mount(&server)
        .await;

    let adapter = GenericAdapter::new(
        reqwest::Client::new(), "local/llama".into(), None,
        format!("{}/v1/generate", server.uri()), ResponseShape::CandidateParts,
    );
    assert_eq!(adapter.complete("hello").await.unwrap(), "from generic");
}

#[tokio::test]
async fn configured_cascade_falls_back_over_http() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota"))
        .expect(1)
        .mount(&gemini)
        .await;

    let router = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(PAGE)))
        .expect(1)
        .mount(&router)
        .await;

    let vars: HashMap<String, String> = [
        ("PAGE_PROVIDERS", "candidate:gemini-2.0-flash,chat:deepseek/deepseek-chat,chat:never/called".to_string()),
        ("GEMINI_API_KEY", "g".to_string()),
        ("GEMINI_API_BASE", gemini.uri()),
        ("OPENROUTER_API_KEY", "o".to_string()),
        ("OPENROUTER_API_BASE", router.uri()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let config = Config::from_vars(vars).unwrap();
    let orchestrator = Orchestrator::from_config(&config).unwrap();
    let result = orchestrator.generate(&Default::default()).await.unwrap();

    assert_eq!(result.markup, "<h1>Widget</h1>");
    assert_eq!(result.stylesheet, "h1{}");
}
