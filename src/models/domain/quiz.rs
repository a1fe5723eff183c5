use serde::{Deserialize, Serialize};

/// Per-session quiz generation settings. Mutated only by a full form
/// submission, so the three fields are always replaced together.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizConfig {
    pub topic: String,
    pub amount: u8,
    pub difficulty: Difficulty,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            topic: "General Knowledge".to_string(),
            amount: 5,
            difficulty: Difficulty::Easy,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One decoded quiz question. Produced only by the response decoder and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub question: String,
    pub choices: Vec<Choice>,
    pub answer: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    pub key: String,
    pub value: String,
}

impl QuestionRecord {
    /// Whether `answer` names one of this question's own choice keys. The
    /// model is asked for that shape but nothing upstream guarantees it.
    pub fn answer_matches_choice(&self) -> bool {
        self.choices.iter().any(|choice| choice.key == self.answer)
    }
}

/// Projection of a question for the answer view, without the choices shown
/// to the quiz taker.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerKeyEntry {
    pub question: String,
    pub answer: String,
    pub explanation: String,
}

impl From<&QuestionRecord> for AnswerKeyEntry {
    fn from(record: &QuestionRecord) -> Self {
        AnswerKeyEntry {
            question: record.question.clone(),
            answer: record.answer.clone(),
            explanation: record.explanation.clone(),
        }
    }
}
