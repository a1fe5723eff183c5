use std::sync::Arc;

use crate::{
    config::Config,
    gateway::{FileStore, GeminiClient, TextGenerator},
    services::quiz_session_service::QuizSessionService,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_session_service: Arc<QuizSessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the Gemini client in as both gateway capabilities. The client
    /// is shared; each capability can be swapped independently through
    /// `with_gateways`.
    pub fn new(config: Config) -> Self {
        let gemini = Arc::new(GeminiClient::new(&config));
        Self::with_gateways(config, gemini.clone(), gemini)
    }

    pub fn with_gateways(
        config: Config,
        files: Arc<dyn FileStore>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            quiz_session_service: Arc::new(QuizSessionService::new(files, generator)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_test_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.gemini_model, "gemini-1.5-flash");
    }
}
