use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::session::GenerationSlot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("field '{0}' must not be empty")] EmptyField(&'static str),
    #[error("at least one advantage is required")] NoAdvantages,
    #[error("advantage index {index} out of range (have {len})")] AdvantageOutOfRange { index: usize, len: usize },
    #[error("cannot remove the last remaining advantage")] LastAdvantage,
}

/// Missing keys fall back to the default palette.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: "#3B82F6".into(),
            secondary: "#1E40AF".into(),
            accent: "#F59E0B".into(),
            background: "#FFFFFF".into(),
            text: "#1F2937".into(),
        }
    }
}

/// What the user tells us about the product. Both generation paths only ever read it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub product_name: String,
    pub short_description: String,
    pub advantages: Vec<String>,
    pub price: String,
    pub cta_link: String, // free-form, "#" is fine
    pub cta_text: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub colors: ColorScheme,
}

impl Default for ContentRecord {
    fn default() -> Self {
        Self {
            product_name: "Product Name".into(),
            short_description: "Describe your product here. Explain what makes it special.".into(),
            advantages: vec![
                "Feature 1: Describe the main feature".into(),
                "Feature 2: Describe another feature".into(),
                "Feature 3: One more important feature".into(),
            ],
            price: "$99".into(),
            cta_link: "#".into(),
            cta_text: "Get Started".into(),
            theme: Some("professional".into()),
            colors: ColorScheme::default(),
        }
    }
}

impl ContentRecord {
    pub fn validate(&self) -> Result<(), RecordError> {
        let required = [
            ("productName", &self.product_name),
            ("shortDescription", &self.short_description),
            ("price", &self.price),
            ("ctaLink", &self.cta_link),
            ("ctaText", &self.cta_text),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(RecordError::EmptyField(name));
            }
        }
        if self.advantages.is_empty() {
            return Err(RecordError::NoAdvantages);
        }
        Ok(())
    }

    pub fn add_advantage(&mut self, text: impl Into<String>) {
        self.advantages.push(text.into());
    }

    pub fn set_advantage(&mut self, index: usize, text: impl Into<String>) -> Result<(), RecordError> {
        let len = self.advantages.len();
        let slot = self.advantages.get_mut(index).ok_or(RecordError::AdvantageOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    /// Removes one advantage, refusing to leave the list empty.
    pub fn remove_advantage(&mut self, index: usize) -> Result<String, RecordError> {
        let len = self.advantages.len();
        if index >= len {
            return Err(RecordError::AdvantageOutOfRange { index, len });
        }
        if len == 1 {
            return Err(RecordError::LastAdvantage);
        }
        Ok(self.advantages.remove(index))
    }
}

/// Markup plus stylesheet. Always replaced as a whole, never merged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub markup: String,
    pub stylesheet: String,
}

/// One page being edited through the API.
pub struct PageDraft {
    pub id: Uuid,
    pub record: ContentRecord,
    pub slot: Arc<GenerationSlot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageDraft {
    pub fn new(record: ContentRecord) -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4(), record, slot: Arc::default(), created_at: now, updated_at: now }
    }

    pub fn view(&self) -> PageView {
        PageView {
            id: self.id,
            record: self.record.clone(),
            result: self.slot.current(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PageView {
    pub id: Uuid,
    pub record: ContentRecord,
    pub result: Option<GenerationResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum GenerateRequest {
    Remote,
    Template {
        #[serde(default)]
        theme: Option<String>,
        #[serde(default)]
        use_record_colors: bool,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AdvantageRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportResponse {
    pub document: String,
    pub data_url: String,
}
