use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    gateway::{FileStore, PromptPart, TextGenerator},
    models::domain::DocumentHandle,
};

const PDF_MIME_TYPE: &str = "application/pdf";

/// Client for the Google generative language API. Implements both gateway
/// capabilities: the files endpoint for ingestion and `generateContent` for
/// text generation.
pub struct GeminiClient {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_data: Option<GeminiFileData>,
}

#[derive(Debug, Serialize)]
struct GeminiFileData {
    mime_type: String,
    file_uri: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct UploadFileResponse {
    file: GeminiFile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiFile {
    name: String,
    uri: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}

fn to_wire_parts(parts: &[PromptPart]) -> Vec<GeminiPart> {
    parts
        .iter()
        .map(|part| match part {
            PromptPart::Text(text) => GeminiPart {
                text: Some(text.clone()),
                file_data: None,
            },
            PromptPart::Document(handle) => GeminiPart {
                text: None,
                file_data: Some(GeminiFileData {
                    mime_type: handle.mime_type.clone(),
                    file_uri: handle.uri.clone(),
                }),
            },
        })
        .collect()
}

#[async_trait]
impl FileStore for GeminiClient {
    async fn upload_document(
        &self,
        local_path: &str,
        display_name: &str,
    ) -> AppResult<DocumentHandle> {
        let bytes = tokio::fs::read(local_path).await.map_err(|err| {
            AppError::UploadError(format!("could not read '{local_path}': {err}"))
        })?;

        let url = format!(
            "{}/upload/v1beta/files?key={}",
            self.base_url,
            self.api_key.expose_secret()
        );

        let response = self
            .client
            .post(&url)
            .header("X-Goog-Upload-Protocol", "raw")
            .header("Content-Type", PDF_MIME_TYPE)
            .body(bytes)
            .send()
            .await
            .map_err(|err| AppError::UploadError(format!("file upload failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UploadError(format!(
                "file was rejected by the gateway ({status}): {body}"
            )));
        }

        let uploaded: UploadFileResponse = response.json().await.map_err(|err| {
            AppError::UploadError(format!("unexpected upload response: {err}"))
        })?;

        log::info!(
            "ingested '{}' as {}",
            display_name,
            uploaded.file.name
        );

        Ok(DocumentHandle {
            name: uploaded.file.name,
            uri: uploaded.file.uri,
            display_name: uploaded
                .file
                .display_name
                .unwrap_or_else(|| display_name.to_string()),
            mime_type: uploaded
                .file
                .mime_type
                .unwrap_or_else(|| PDF_MIME_TYPE.to_string()),
            uploaded_at: Some(Utc::now()),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_content(&self, parts: &[PromptPart]) -> AppResult<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: to_wire_parts(parts),
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose_secret()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| AppError::GenerationError(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationError(format!(
                "gateway returned {status}: {body}"
            )));
        }

        let generated: GeminiResponse = response.json().await.map_err(|err| {
            AppError::GenerationError(format!("unexpected generation response: {err}"))
        })?;

        generated
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| AppError::GenerationError("model returned no candidates".into()))
    }
}
