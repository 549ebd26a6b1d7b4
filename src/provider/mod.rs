//! Remote text-generation providers behind one trait.
//!
//! Each adapter turns a prompt into raw model text, hiding the provider's
//! request format and response envelope. Which adapter serves an entry is
//! decided by its configured kind, never by sniffing the model identifier.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use std::{fmt, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::{error, info};

use crate::config::{ConfigError, Credentials};

pub mod envelope;
pub mod chat;
pub mod gemini;
pub mod generic;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("HTTP error: {0}")] Http(String),
    #[error("status {status}: {body}")] Status { status: u16, body: String },
    #[error("response shape mismatch: {0}")] ShapeMismatch(String),
    #[error("missing credential {0}")] MissingCredential(&'static str),
    #[error("no reply within {0:?}")] Timeout(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseShape {
    /// `choices[0].message.content`
    ChatCompletion,
    /// `candidates[0].content.parts[0].text`
    CandidateParts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdapterKind {
    ChatCompletion,
    CandidateParts,
    Generic,
}

/// One entry of the fallback list. List order is the priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderSpec {
    pub identifier: String,
    pub kind: AdapterKind,
    pub shape: ResponseShape,
}

impl FromStr for ProviderSpec {
    type Err = ConfigError;

    /// `kind:identifier`, split on the first colon only since identifiers
    /// like `vendor/model:free` carry their own.
    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let entry = entry.trim();
        let (kind, identifier) = entry
            .split_once(':')
            .ok_or_else(|| ConfigError::ProviderEntry(entry.to_string()))?;
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ConfigError::ProviderEntry(entry.to_string()));
        }
        let (kind, shape) = match kind.trim() {
            "chat" => (AdapterKind::ChatCompletion, ResponseShape::ChatCompletion),
            "candidate" => (AdapterKind::CandidateParts, ResponseShape::CandidateParts),
            "generic-chat" => (AdapterKind::Generic, ResponseShape::ChatCompletion),
            "generic-candidate" => (AdapterKind::Generic, ResponseShape::CandidateParts),
            other => return Err(ConfigError::ProviderKind(other.to_string())),
        };
        Ok(Self { identifier: identifier.to_string(), kind, shape })
    }
}

impl fmt::Display for ProviderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match (self.kind, self.shape) {
            (AdapterKind::ChatCompletion, _) => "chat",
            (AdapterKind::CandidateParts, _) => "candidate",
            (AdapterKind::Generic, ResponseShape::ChatCompletion) => "generic-chat",
            (AdapterKind::Generic, ResponseShape::CandidateParts) => "generic-candidate",
        };
        write!(f, "{kind}:{}", self.identifier)
    }
}

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn id(&self) -> &str;

    fn shape(&self) -> ResponseShape;

    /// Raw model text, already unwrapped from the provider envelope.
    async fn complete(&self, prompt: &str) -> Result<String, AdapterError>;
}

pub type DynAdapter = Box<dyn ProviderAdapter>;

pub fn make_adapter(spec: &ProviderSpec, creds: &Credentials, client: &Client) -> Result<DynAdapter, ConfigError> {
    Ok(match spec.kind {
        AdapterKind::ChatCompletion => Box::new(chat::ChatCompletionAdapter::new(
            client.clone(),
            spec.identifier.clone(),
            creds.openrouter_key.clone(),
            creds.openrouter_base.clone(),
        )),
        AdapterKind::CandidateParts => Box::new(gemini::CandidatePartsAdapter::new(
            client.clone(),
            spec.identifier.clone(),
            creds.gemini_key.clone(),
            creds.gemini_base.clone(),
        )),
        AdapterKind::Generic => {
            let url = creds.generic_url.clone().ok_or(ConfigError::MissingGenericUrl)?;
            Box::new(generic::GenericAdapter::new(
                client.clone(),
                spec.identifier.clone(),
                creds.generic_key.clone(),
                url,
                spec.shape,
            ))
        }
    })
}

/// Sends the request and hands back the body of a 2xx reply.
pub(crate) async fn send(provider: &str, request: RequestBuilder) -> Result<String, AdapterError> {
    let response = request
        .send()
        .await
        .map_err(|e| AdapterError::Http(e.without_url().to_string()))?;

    let status = response.status();
    info!("📥 [{}] Response status: {}", provider, status);

    let body = response
        .text()
        .await
        .map_err(|e| AdapterError::Http(e.without_url().to_string()))?;

    if !status.is_success() {
        error!("❌ [{}] API error response: {}", provider, preview(&body, 500));
        return Err(AdapterError::Status { status: status.as_u16(), body: preview(&body, 500) });
    }
    Ok(body)
}

/// Shortens text for log lines without splitting a character.
pub fn preview(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...[{} chars total]", &text[..cut], text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_in_all_kinds() {
        let spec: ProviderSpec = "chat:deepseek/deepseek-chat:free".parse().unwrap();
        assert_eq!(spec.identifier, "deepseek/deepseek-chat:free");
        assert_eq!((spec.kind, spec.shape), (AdapterKind::ChatCompletion, ResponseShape::ChatCompletion));

        let spec: ProviderSpec = " candidate : gemini-2.0-flash ".parse().unwrap();
        assert_eq!(spec.identifier, "gemini-2.0-flash");
        assert_eq!(spec.shape, ResponseShape::CandidateParts);

        let spec: ProviderSpec = "generic-candidate:local/model".parse().unwrap();
        assert_eq!((spec.kind, spec.shape), (AdapterKind::Generic, ResponseShape::CandidateParts));
        assert_eq!(spec.to_string(), "generic-candidate:local/model");
    }

    #[test]
    fn rejects_bad_entries() {
        assert!(matches!("gemini-2.0-flash".parse::<ProviderSpec>(), Err(ConfigError::ProviderEntry(_))));
        assert!(matches!("chat:".parse::<ProviderSpec>(), Err(ConfigError::ProviderEntry(_))));
        assert!(matches!("openai:gpt-4o".parse::<ProviderSpec>(), Err(ConfigError::ProviderKind(k)) if k == "openai"));
    }

    #[test]
    fn preview_respects_char_boundaries() {
        assert_eq!(preview("short", 10), "short");
        let long = "é".repeat(10);
        assert!(preview(&long, 3).starts_with('é'));
        assert!(preview(&long, 3).ends_with("[20 chars total]"));
    }
}
