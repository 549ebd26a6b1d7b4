//! Cascading generation across remote providers.
//!
//! Providers are tried strictly one after another in configured order. The
//! first one that hands back non-empty text wins and nothing after it is
//! called. Its text must then contain both marker-framed sections; if it
//! doesn't, the run fails without consulting the remaining providers.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::{Config, ConfigError};
use crate::extract::{extract, Delimiters};
use crate::models::{ContentRecord, GenerationResult};
use crate::prompt::build_prompt;
use crate::provider::{make_adapter, preview, AdapterError, DynAdapter, ProviderAdapter};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttemptFailure {
    pub provider: String,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("provider '{provider}' replied without usable HTML and CSS sections")]
    Extraction { provider: String },
    #[error("all {} configured providers failed", .attempts.len())]
    AllProvidersFailed { attempts: Vec<AttemptFailure> },
}

pub struct Orchestrator {
    adapters: Vec<DynAdapter>,
    delimiters: Delimiters,
    attempt_timeout: Option<Duration>,
}

impl Orchestrator {
    pub fn new(adapters: Vec<DynAdapter>) -> Self {
        Self { adapters, delimiters: Delimiters::default(), attempt_timeout: None }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let client = reqwest::Client::new();
        let adapters = config.providers.iter()
            .enumerate()
            .map(|(index, spec)| {
                let adapter = make_adapter(spec, &config.credentials, &client)?;
                info!("🧩 Provider #{}: {} ({:?})", index + 1, spec, adapter.shape());
                Ok(adapter)
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self::new(adapters).with_attempt_timeout(config.attempt_timeout))
    }

    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    pub fn with_attempt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn provider_ids(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.id()).collect()
    }

    pub async fn generate(&self, record: &ContentRecord) -> Result<GenerationResult, GenerationError> {
        let prompt = build_prompt(record, &self.delimiters);
        info!("🚀 Generating landing page for '{}' across {} provider(s)", record.product_name, self.adapters.len());

        let mut attempts = Vec::new();
        for (index, adapter) in self.adapters.iter().enumerate() {
            let provider = adapter.id();
            info!("🎯 Attempt {}/{}: provider '{}'", index + 1, self.adapters.len(), provider);

            let reason = match self.attempt(adapter.as_ref(), &prompt).await {
                Ok(text) if !text.trim().is_empty() => {
                    info!("✅ Provider '{}' answered ({} chars)", provider, text.len());
                    return self.sections(provider, &text);
                }
                Ok(_) => "empty response text".to_string(),
                Err(e) => e.to_string(),
            };
            warn!("❌ Provider '{}' failed: {}", provider, reason);
            attempts.push(AttemptFailure { provider: provider.to_string(), reason });
        }

        error!("❌ All {} provider(s) failed", attempts.len());
        Err(GenerationError::AllProvidersFailed { attempts })
    }

    async fn attempt(&self, adapter: &dyn ProviderAdapter, prompt: &str) -> Result<String, AdapterError> {
        match self.attempt_timeout {
            Some(limit) => tokio::time::timeout(limit, adapter.complete(prompt))
                .await
                .map_err(|_| AdapterError::Timeout(limit))?,
            None => adapter.complete(prompt).await,
        }
    }

    fn sections(&self, provider: &str, text: &str) -> Result<GenerationResult, GenerationError> {
        match extract(text, &self.delimiters) {
            Some(s) if !s.markup.trim().is_empty() && !s.stylesheet.trim().is_empty() => {
                info!("📦 Extracted {} bytes of HTML and {} bytes of CSS", s.markup.len(), s.stylesheet.len());
                Ok(GenerationResult { markup: s.markup.to_string(), stylesheet: s.stylesheet.to_string() })
            }
            _ => {
                error!("❌ No usable sections in reply from '{}': {}", provider, preview(text, 300));
                Err(GenerationError::Extraction { provider: provider.to_string() })
            }
        }
    }
}
