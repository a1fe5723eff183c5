pub mod document;
pub mod quiz;
pub mod session;
pub mod transcript;

pub use document::DocumentHandle;
pub use quiz::{AnswerKeyEntry, Choice, Difficulty, QuestionRecord, QuizConfig};
pub use session::{QuizSession, SessionState};
pub use transcript::{Role, Transcript, TranscriptEntry};
