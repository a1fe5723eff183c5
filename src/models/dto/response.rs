use serde::Serialize;
use uuid::Uuid;

use crate::{
    constants::prompts::PLACEHOLDER_GREETING,
    models::domain::{AnswerKeyEntry, Role, Transcript},
    services::quiz_session_service::{QuizOutcome, SummaryOutcome},
};

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DocumentUploadedResponse {
    pub display_name: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub document: String,
    pub summary: String,
}

impl From<SummaryOutcome> for SummaryResponse {
    fn from(outcome: SummaryOutcome) -> Self {
        SummaryResponse {
            document: outcome.document,
            summary: outcome.summary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub display: String,
    pub question_count: usize,
}

impl From<QuizOutcome> for QuizResponse {
    fn from(outcome: QuizOutcome) -> Self {
        QuizResponse {
            display: outcome.display,
            question_count: outcome.question_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerKeyResponse {
    pub entries: Vec<AnswerKeyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntryView {
    pub role: Role,
    pub content: String,
}

/// Conversation view rule, applied at render time only: the first stored
/// entry is skipped unconditionally and the fixed greeting is appended
/// last. The stored transcript itself is never touched.
pub fn render_transcript(transcript: &Transcript) -> Vec<TranscriptEntryView> {
    let mut view: Vec<TranscriptEntryView> = transcript
        .all()
        .iter()
        .skip(1)
        .map(|entry| TranscriptEntryView {
            role: entry.role,
            content: entry.content.clone(),
        })
        .collect();

    view.push(TranscriptEntryView {
        role: Role::Model,
        content: PLACEHOLDER_GREETING.to_string(),
    });

    view
}
