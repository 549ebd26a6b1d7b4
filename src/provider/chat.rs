use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use super::{envelope, send, AdapterError, ProviderAdapter, ResponseShape};

pub const DEFAULT_BASE: &str = "https://openrouter.ai/api/v1";

/// OpenAI-compatible `/chat/completions` endpoint (OpenRouter by default),
/// which fronts many model families behind `vendor/model` identifiers.
pub struct ChatCompletionAdapter {
    client: Client,
    model: String,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Msg<'a>; 1],
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

impl ChatCompletionAdapter {
    pub fn new(client: Client, model: String, api_key: Option<String>, base_url: String) -> Self {
        Self { client, model, api_key, base_url }
    }
}

#[async_trait]
impl ProviderAdapter for ChatCompletionAdapter {
    fn id(&self) -> &str {
        &self.model
    }

    fn shape(&self) -> ResponseShape {
        ResponseShape::ChatCompletion
    }

    async fn complete(&self, prompt: &str) -> Result<String, AdapterError> {
        let api_key = self.api_key.as_deref().ok_or(AdapterError::MissingCredential("OPENROUTER_API_KEY"))?;
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        info!("🔗 [{}] POST {}", self.model, url);

        let body = ChatRequest {
            model: &self.model,
            messages: [Msg { role: "user", content: prompt }],
        };
        let request = self.client.post(&url).bearer_auth(api_key).json(&body);
        let text = send(&self.model, request).await?;
        envelope::decode(ResponseShape::ChatCompletion, &text)
    }
}
