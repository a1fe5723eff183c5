pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;

use crate::{errors::AppResult, models::domain::DocumentHandle};

/// One piece of a generation request: either literal prompt text or a
/// previously ingested document.
#[derive(Clone, Debug, PartialEq)]
pub enum PromptPart {
    Text(String),
    Document(DocumentHandle),
}

impl PromptPart {
    pub fn text(content: impl Into<String>) -> Self {
        PromptPart::Text(content.into())
    }
}

/// File ingestion capability of the model gateway.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn upload_document(
        &self,
        local_path: &str,
        display_name: &str,
    ) -> AppResult<DocumentHandle>;
}

/// Text generation capability of the model gateway. A single blocking
/// round-trip per call; retries and timeouts are whatever the backend
/// provides.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_content(&self, parts: &[PromptPart]) -> AppResult<String>;
}
