use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    /// Reads configuration from the process environment. The Gemini API key
    /// has no default; a missing key fails startup rather than the first
    /// request.
    pub fn from_env() -> AppResult<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            AppError::ConfigurationError("GEMINI_API_KEY environment variable is not set".into())
        })?;

        Ok(Self {
            gemini_api_key: SecretString::from(gemini_api_key),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test_api_key".to_string()),
            gemini_model: "gemini-1.5-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
