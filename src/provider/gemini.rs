use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::info;

use super::{envelope, send, AdapterError, ProviderAdapter, ResponseShape};

pub const DEFAULT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini `generateContent`; the key travels as a query parameter.
pub struct CandidatePartsAdapter {
    client: Client,
    model: String,
    api_key: Option<String>,
    base_url: String,
}

impl CandidatePartsAdapter {
    pub fn new(client: Client, model: String, api_key: Option<String>, base_url: String) -> Self {
        Self { client, model, api_key, base_url }
    }
}

#[async_trait]
impl ProviderAdapter for CandidatePartsAdapter {
    fn id(&self) -> &str {
        &self.model
    }

    fn shape(&self) -> ResponseShape {
        ResponseShape::CandidateParts
    }

    async fn complete(&self, prompt: &str) -> Result<String, AdapterError> {
        let api_key = self.api_key.as_deref().ok_or(AdapterError::MissingCredential("GEMINI_API_KEY"))?;
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'), self.model, api_key
        );

        info!("🔗 [{}] POST {}", self.model, url.replace(api_key, "***"));

        let request_body = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "temperature": 0.7,
                "topP": 0.95,
                "candidateCount": 1
            }
        });

        let request = self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body);
        let text = send(&self.model, request).await?;
        envelope::decode(ResponseShape::CandidateParts, &text)
    }
}
