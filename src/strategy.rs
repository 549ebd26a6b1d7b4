use async_trait::async_trait;

use crate::models::{ContentRecord, GenerationResult};
use crate::orchestrator::{GenerationError, Orchestrator};
use crate::template;
use crate::themes::Theme;

/// Interchangeable ways of turning a record into a page.
#[async_trait]
pub trait PageComposer: Send + Sync {
    fn name(&self) -> &str;

    async fn compose(&self, record: &ContentRecord) -> Result<GenerationResult, GenerationError>;
}

#[async_trait]
impl PageComposer for Orchestrator {
    fn name(&self) -> &str {
        "remote"
    }

    async fn compose(&self, record: &ContentRecord) -> Result<GenerationResult, GenerationError> {
        self.generate(record).await
    }
}

/// Offline path: always succeeds.
pub struct TemplateComposer {
    theme: Theme,
}

impl TemplateComposer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

#[async_trait]
impl PageComposer for TemplateComposer {
    fn name(&self) -> &str {
        "template"
    }

    async fn compose(&self, record: &ContentRecord) -> Result<GenerationResult, GenerationError> {
        Ok(template::render(record, &self.theme))
    }
}
