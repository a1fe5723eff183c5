pub mod prompt_builder;
pub mod quiz_decoder;
pub mod quiz_session_service;
