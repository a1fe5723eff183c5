use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AnswerKeyEntry, DocumentHandle, QuizConfig, Transcript},
};

/// Observable session states. Summarizing and quizzifying happen inside one
/// blocking call and are not observable from outside the service.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum SessionState {
    Idle,
    DocumentLoaded,
}

/// All state owned by one user session: the current form values, the last
/// ingested document, the conversation log and the answer key of the most
/// recent quiz generation. One instance per session, never shared.
#[derive(Clone, Debug)]
pub struct QuizSession {
    pub id: Uuid,
    pub config: QuizConfig,
    pub document: Option<DocumentHandle>,
    pub transcript: Transcript,
    pub answer_key: Vec<AnswerKeyEntry>,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            config: QuizConfig::default(),
            document: None,
            transcript: Transcript::new(),
            answer_key: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.document.is_some() {
            SessionState::DocumentLoaded
        } else {
            SessionState::Idle
        }
    }

    /// Replaces any previously ingested document. The quiz config keeps its
    /// last edited values.
    pub fn attach_document(&mut self, handle: DocumentHandle) {
        self.document = Some(handle);
    }

    pub fn document(&self) -> AppResult<&DocumentHandle> {
        self.document
            .as_ref()
            .ok_or_else(|| AppError::UploadError("no file has been uploaded or processed".into()))
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
