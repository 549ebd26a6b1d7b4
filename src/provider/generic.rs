use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use super::{envelope, send, AdapterError, ProviderAdapter, ResponseShape};

/// Any endpoint that takes `{model, prompt}` and answers in one of the known
/// envelope shapes. The bearer key is optional for self-hosted gateways.
pub struct GenericAdapter {
    client: Client,
    model: String,
    api_key: Option<String>,
    url: String,
    shape: ResponseShape,
}

#[derive(Serialize)]
struct PromptRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

impl GenericAdapter {
    pub fn new(client: Client, model: String, api_key: Option<String>, url: String, shape: ResponseShape) -> Self {
        Self { client, model, api_key, url, shape }
    }
}

#[async_trait]
impl ProviderAdapter for GenericAdapter {
    fn id(&self) -> &str {
        &self.model
    }

    fn shape(&self) -> ResponseShape {
        self.shape
    }

    async fn complete(&self, prompt: &str) -> Result<String, AdapterError> {
        info!("🔗 [{}] POST {} (expecting {:?})", self.model, self.url, self.shape);
        let mut request = self.client
            .post(&self.url)
            .json(&PromptRequest { model: &self.model, prompt });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let text = send(&self.model, request).await?;
        envelope::decode(self.shape, &text)
    }
}
