use crate::{
    errors::{AppError, AppResult},
    models::domain::QuestionRecord,
};

const JSON_FENCE_OPEN: &str = "```json\n";
const JSON_FENCE_CLOSE: &str = "\n```";

/// Decodes a raw model response into question records.
///
/// The fence markers are removed as plain substrings wherever they occur,
/// not trimmed from the ends. A marker that happens to appear inside a
/// question or explanation string is stripped there too.
///
/// Anything that fails to parse as a JSON array of question objects after
/// stripping is a hard decode error; there is no retry or fallback for a
/// malformed generation.
pub fn decode_quiz(raw: &str) -> AppResult<Vec<QuestionRecord>> {
    let stripped = raw
        .replace(JSON_FENCE_OPEN, "")
        .replace(JSON_FENCE_CLOSE, "");

    let records: Vec<QuestionRecord> = serde_json::from_str(&stripped)
        .map_err(|err| AppError::DecodeError(format!("response is not a quiz array: {err}")))?;

    for record in &records {
        if !record.answer_matches_choice() {
            log::warn!(
                "answer '{}' does not match any choice key for question '{}'",
                record.answer,
                record.question
            );
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{fenced, quiz_json};

    #[test]
    fn decodes_fenced_and_unfenced_payloads_identically() {
        let payload = quiz_json(3);

        let from_plain = decode_quiz(&payload).expect("plain payload should decode");
        let from_fenced = decode_quiz(&fenced(&payload)).expect("fenced payload should decode");

        assert_eq!(from_plain, from_fenced);
        assert_eq!(from_plain.len(), 3);
    }

    #[test]
    fn round_trip_preserves_field_values_and_choice_order() {
        for amount in 1..=20usize {
            let records = decode_quiz(&quiz_json(amount)).expect("payload should decode");

            assert_eq!(records.len(), amount);
            for (index, record) in records.iter().enumerate() {
                assert_eq!(record.question, format!("Q{}", index + 1));
                let keys: Vec<&str> =
                    record.choices.iter().map(|c| c.key.as_str()).collect();
                assert_eq!(keys, ["A", "B", "C", "D"]);
                assert_eq!(record.answer, "A");
                assert_eq!(record.explanation, "because");
            }
        }
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let result = decode_quiz("the model wrote prose instead");

        assert!(matches!(result, Err(AppError::DecodeError(_))));
    }

    #[test]
    fn truncated_array_is_a_decode_error() {
        let payload = quiz_json(2);
        let truncated = &payload[..payload.len() - 10];

        let result = decode_quiz(&fenced(truncated));
        assert!(matches!(result, Err(AppError::DecodeError(_))));
    }

    #[test]
    fn leftover_text_around_the_fence_is_a_decode_error() {
        let noisy = format!("Here is your quiz:\n{}", fenced(&quiz_json(1)));

        let result = decode_quiz(&noisy);
        assert!(matches!(result, Err(AppError::DecodeError(_))));
    }

    #[test]
    fn fence_marker_inside_a_string_is_stripped_there_too() {
        // Substring removal is global: an opening marker embedded in a
        // field value (raw newline included) is deleted from the payload
        // before parsing, changing the decoded text.
        let payload = "[{\"question\":\"Use ```json\n fences\",\"choices\":[{\"key\":\"A\",\"value\":\"v1\"},{\"key\":\"B\",\"value\":\"v2\"},{\"key\":\"C\",\"value\":\"v3\"},{\"key\":\"D\",\"value\":\"v4\"}],\"answer\":\"A\",\"explanation\":\"because\"}]";

        let records = decode_quiz(payload).expect("payload should decode");
        assert_eq!(records[0].question, "Use  fences");
    }

    #[test]
    fn dangling_answer_key_still_decodes() {
        let payload = r#"[{"question":"Q1","choices":[{"key":"A","value":"v1"},{"key":"B","value":"v2"},{"key":"C","value":"v3"},{"key":"D","value":"v4"}],"answer":"E","explanation":"because"}]"#;

        let records = decode_quiz(payload).expect("payload should decode");
        assert_eq!(records.len(), 1);
        assert!(!records[0].answer_matches_choice());
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let payload = r#"[{"question":"Q1","choices":[],"answer":"A"}]"#;

        let result = decode_quiz(payload);
        assert!(matches!(result, Err(AppError::DecodeError(_))));
    }
}
