use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    constants::prompts::SUMMARIZE_PROMPT,
    errors::{AppError, AppResult},
    gateway::{FileStore, PromptPart, TextGenerator},
    models::domain::{
        AnswerKeyEntry, DocumentHandle, QuestionRecord, QuizConfig, QuizSession, Transcript,
        TranscriptEntry,
    },
    services::{prompt_builder::build_quiz_prompt, quiz_decoder::decode_quiz},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub document: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOutcome {
    pub display: String,
    pub question_count: usize,
}

/// Orchestrates the quiz flow for every live session: holds the session
/// registry and drives the gateway, prompt builder and decoder. Each user
/// interaction is one blocking round-trip; an error aborts that interaction
/// and leaves the session usable for the next one.
pub struct QuizSessionService {
    files: Arc<dyn FileStore>,
    generator: Arc<dyn TextGenerator>,
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl QuizSessionService {
    pub fn new(files: Arc<dyn FileStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            files,
            generator,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create_session(&self) -> Uuid {
        let session = QuizSession::new();
        let id = session.id;

        self.sessions.write().await.insert(id, session);
        log::info!("created quiz session {id}");

        id
    }

    /// Replaces the whole config at once; partial edits do not exist at
    /// this level.
    pub async fn update_config(&self, id: &Uuid, config: QuizConfig) -> AppResult<QuizConfig> {
        let mut sessions = self.sessions.write().await;
        let session = get_session_mut(&mut sessions, id)?;

        session.config = config.clone();
        Ok(config)
    }

    /// Ingests a document through the file store and attaches the handle to
    /// the session, discarding any previous one. The config keeps its last
    /// edited values. On gateway failure the session is left untouched.
    pub async fn upload_document(
        &self,
        id: &Uuid,
        path: &str,
        display_name: &str,
    ) -> AppResult<DocumentHandle> {
        {
            let sessions = self.sessions.read().await;
            get_session(&sessions, id)?;
        }

        let handle = self.files.upload_document(path, display_name).await?;

        let mut sessions = self.sessions.write().await;
        let session = get_session_mut(&mut sessions, id)?;
        session.attach_document(handle.clone());

        log::info!(
            "session {id}: document '{}' attached",
            handle.display_name
        );
        Ok(handle)
    }

    /// Sends the fixed summarization instruction plus the document, then
    /// appends a document-name marker and the summary to the transcript.
    pub async fn summarize(&self, id: &Uuid) -> AppResult<SummaryOutcome> {
        let mut sessions = self.sessions.write().await;
        let session = get_session_mut(&mut sessions, id)?;
        let document = session.document()?.clone();

        let parts = [
            PromptPart::text(SUMMARIZE_PROMPT),
            PromptPart::Document(document.clone()),
        ];
        let summary = self.generator.generate_content(&parts).await?;

        let marker = format!("Document: {}", document.display_name);
        session.transcript.append_many([
            TranscriptEntry::model(marker.clone()),
            TranscriptEntry::model(summary.clone()),
        ]);

        Ok(SummaryOutcome {
            document: marker,
            summary,
        })
    }

    /// Generates a quiz for the session's current config and document. The
    /// answer key is cleared up front and only repopulated after a
    /// successful decode; a malformed response leaves no transcript entry.
    pub async fn quizzify(&self, id: &Uuid) -> AppResult<QuizOutcome> {
        let mut sessions = self.sessions.write().await;
        let session = get_session_mut(&mut sessions, id)?;
        let document = session.document()?.clone();

        session.answer_key.clear();

        let prompt = build_quiz_prompt(
            &session.config.topic,
            session.config.amount,
            document.reference(),
        );
        let parts = [PromptPart::Text(prompt), PromptPart::Document(document)];
        let raw = self.generator.generate_content(&parts).await?;

        let questions = decode_quiz(&raw)?;
        let display = compose_quiz_display(&questions);

        session.transcript.append(TranscriptEntry::model(display.clone()));
        session.answer_key = questions.iter().map(AnswerKeyEntry::from).collect();

        log::info!(
            "session {id}: generated quiz with {} question(s)",
            questions.len()
        );

        Ok(QuizOutcome {
            question_count: questions.len(),
            display,
        })
    }

    /// Forwards a chat message verbatim, outside the quiz flow. Both the
    /// user message and the reply are appended only once the round-trip
    /// succeeds.
    pub async fn chat(&self, id: &Uuid, message: &str) -> AppResult<String> {
        let mut sessions = self.sessions.write().await;
        let session = get_session_mut(&mut sessions, id)?;

        let parts = [PromptPart::text(message)];
        let reply = self.generator.generate_content(&parts).await?;

        session.transcript.append_many([
            TranscriptEntry::user(message),
            TranscriptEntry::model(reply.clone()),
        ]);

        Ok(reply)
    }

    pub async fn transcript(&self, id: &Uuid) -> AppResult<Transcript> {
        let sessions = self.sessions.read().await;
        let session = get_session(&sessions, id)?;
        Ok(session.transcript.clone())
    }

    pub async fn answer_key(&self, id: &Uuid) -> AppResult<Vec<AnswerKeyEntry>> {
        let sessions = self.sessions.read().await;
        let session = get_session(&sessions, id)?;
        Ok(session.answer_key.clone())
    }

    pub async fn config(&self, id: &Uuid) -> AppResult<QuizConfig> {
        let sessions = self.sessions.read().await;
        let session = get_session(&sessions, id)?;
        Ok(session.config.clone())
    }
}

fn get_session<'a>(
    sessions: &'a HashMap<Uuid, QuizSession>,
    id: &Uuid,
) -> AppResult<&'a QuizSession> {
    sessions
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Session with id '{id}' not found")))
}

fn get_session_mut<'a>(
    sessions: &'a mut HashMap<Uuid, QuizSession>,
    id: &Uuid,
) -> AppResult<&'a mut QuizSession> {
    sessions
        .get_mut(id)
        .ok_or_else(|| AppError::NotFound(format!("Session with id '{id}' not found")))
}

/// Question text followed by its lettered choices, one blank line after
/// each question block. Labels come from the choice position, not from the
/// keys the model returned.
fn compose_quiz_display(questions: &[QuestionRecord]) -> String {
    let mut display = String::new();

    for question in questions {
        display.push_str(&question.question);
        display.push('\n');
        for (index, choice) in question.choices.iter().enumerate() {
            let label = (b'A' + index as u8) as char;
            display.push_str(&format!("{label}. {}\n", choice.value));
        }
        display.push('\n');
    }

    display
}
