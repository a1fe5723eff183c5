use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Difficulty, QuizConfig};

/// Full replacement of the quiz form values. All three fields travel
/// together; there is no partial update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuizConfigRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    #[validate(range(min = 1, max = 20))]
    pub amount: u8,

    pub difficulty: Difficulty,
}

impl From<UpdateQuizConfigRequest> for QuizConfig {
    fn from(request: UpdateQuizConfigRequest) -> Self {
        QuizConfig {
            topic: request.topic,
            amount: request.amount,
            difficulty: request.difficulty,
        }
    }
}

/// Points the gateway at a file already present on this host. Reading the
/// bytes and shipping them to the model gateway is the file store's job.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadDocumentRequest {
    #[validate(length(min = 1))]
    pub path: String,

    pub display_name: Option<String>,
}

impl UploadDocumentRequest {
    /// Falls back to the file name portion of the path.
    pub fn display_name(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => self
                .path
                .rsplit('/')
                .next()
                .unwrap_or(self.path.as_str())
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 10000))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_config_request() {
        let request = UpdateQuizConfigRequest {
            topic: "Photosynthesis".to_string(),
            amount: 5,
            difficulty: Difficulty::Medium,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_amount_out_of_range() {
        let request = UpdateQuizConfigRequest {
            topic: "Photosynthesis".to_string(),
            amount: 21,
            difficulty: Difficulty::Easy,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_topic_rejected() {
        let request = UpdateQuizConfigRequest {
            topic: String::new(),
            amount: 5,
            difficulty: Difficulty::Easy,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_config_request_conversion() {
        let request = UpdateQuizConfigRequest {
            topic: "History".to_string(),
            amount: 10,
            difficulty: Difficulty::Hard,
        };

        let config: QuizConfig = request.into();
        assert_eq!(config.topic, "History");
        assert_eq!(config.amount, 10);
        assert_eq!(config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_upload_display_name_defaults_to_file_name() {
        let request = UploadDocumentRequest {
            path: "/tmp/uploads/biology.pdf".to_string(),
            display_name: None,
        };
        assert_eq!(request.display_name(), "biology.pdf");

        let named = UploadDocumentRequest {
            path: "/tmp/uploads/biology.pdf".to_string(),
            display_name: Some("Biology notes".to_string()),
        };
        assert_eq!(named.display_name(), "Biology notes");
    }

    #[test]
    fn test_empty_chat_message_rejected() {
        let request = ChatRequest {
            message: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
