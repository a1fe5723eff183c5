pub mod session_handler;

pub use session_handler::{
    chat, create_session, get_answer_key, get_transcript, health_check, quizzify, summarize,
    update_config, upload_document,
};
