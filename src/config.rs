use std::{collections::HashMap, time::Duration};
use thiserror::Error;

use crate::provider::{chat, gemini, AdapterKind, ProviderSpec};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("provider entry '{0}' must look like kind:identifier")] ProviderEntry(String),
    #[error("unknown provider kind '{0}' (expected chat, candidate, generic-chat or generic-candidate)")] ProviderKind(String),
    #[error("GENERIC_API_URL must be set when a generic provider is configured")] MissingGenericUrl,
    #[error("invalid value for {key}: {value}")] Invalid { key: &'static str, value: String },
}

pub const DEFAULT_PROVIDERS: &str = "candidate:gemini-2.0-flash";

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub gemini_key: Option<String>,
    pub gemini_base: String,
    pub openrouter_key: Option<String>,
    pub openrouter_base: String,
    pub generic_key: Option<String>,
    pub generic_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub providers: Vec<ProviderSpec>,
    pub credentials: Credentials,
    pub attempt_timeout: Option<Duration>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Builds the config from an explicit variable map; blank values count as unset.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let providers = parse_providers(get("PAGE_PROVIDERS").as_deref().unwrap_or(DEFAULT_PROVIDERS))?;

        let credentials = Credentials {
            gemini_key: get("GEMINI_API_KEY"),
            gemini_base: get("GEMINI_API_BASE").unwrap_or_else(|| gemini::DEFAULT_BASE.to_string()),
            openrouter_key: get("OPENROUTER_API_KEY"),
            openrouter_base: get("OPENROUTER_API_BASE").unwrap_or_else(|| chat::DEFAULT_BASE.to_string()),
            generic_key: get("GENERIC_API_KEY"),
            generic_url: get("GENERIC_API_URL"),
        };
        if credentials.generic_url.is_none() && providers.iter().any(|p| p.kind == AdapterKind::Generic) {
            return Err(ConfigError::MissingGenericUrl);
        }

        let attempt_timeout = match get("PAGE_ATTEMPT_TIMEOUT_SECS") {
            Some(v) => match v.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::Invalid { key: "PAGE_ATTEMPT_TIMEOUT_SECS", value: v }),
            },
            None => None,
        };

        let port = match get("PORT") {
            Some(v) => v.parse::<u16>().map_err(|_| ConfigError::Invalid { key: "PORT", value: v })?,
            None => 8080,
        };

        Ok(Self { providers, credentials, attempt_timeout, port })
    }
}

pub fn parse_providers(list: &str) -> Result<Vec<ProviderSpec>, ConfigError> {
    list.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(str::parse)
        .collect()
}
