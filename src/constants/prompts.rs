/// Fixed instruction sent together with the document part when the user
/// asks for a summary.
pub const SUMMARIZE_PROMPT: &str =
    "Give me a summary of this pdf file and mention the key points.";

/// Greeting shown at the top of every conversation. Inserted when the
/// transcript is rendered, never stored in it.
pub const PLACEHOLDER_GREETING: &str = "Upload a file to summarize or quizzify.";
