
#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_quiz_json_shape() {
        let payload = quiz_json(2);
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&payload).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["question"], "Q1");
        assert_eq!(parsed[1]["question"], "Q2");
        assert_eq!(parsed[0]["choices"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_fixtures_fenced() {
        let wrapped = fenced("[]");
        assert!(wrapped.starts_with("```json\n"));
        assert!(wrapped.ends_with("\n```"));
    }

    #[test]
    fn test_fixtures_sample_handle() {
        let handle = sample_handle("notes.pdf");
        assert_eq!(handle.display_name, "notes.pdf");
        assert_eq!(handle.mime_type, "application/pdf");
    }
}
