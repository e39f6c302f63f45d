use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::Word;

/// Load a word-level transcript artifact from a JSON file.
///
/// Read and decode failures propagate to the caller; recovery is the
/// owning pipeline's decision.
pub fn load_transcript_file(path: &Path) -> Result<Vec<Word>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {:?}", path))?;
    load_transcript_json(&content)
}

/// Parse transcript JSON into words.
///
/// The artifact is expected to be a top-level array of word objects; any
/// other well-formed top-level value yields an empty word list.
pub fn load_transcript_json(json: &str) -> Result<Vec<Word>> {
    let value: Value = serde_json::from_str(json).context("Failed to parse transcript JSON")?;

    match value {
        Value::Array(_) => {
            serde_json::from_value(value).context("Failed to decode transcript words")
        }
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_transcript_json() {
        let json = r#"[
            {"text": "hello", "start": 0.5, "end": 0.8, "speaker": "A"},
            {"word": "world", "start": 0.9, "end": 1.2}
        ]"#;

        let words = load_transcript_json(json).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "hello");
        assert_eq!(words[0].speaker, Some("A".to_string()));
        assert_eq!(words[1].text, "world");
        assert_eq!(words[1].speaker, None);
    }

    #[test]
    fn test_non_array_yields_empty_list() {
        let words = load_transcript_json(r#"{"status": "pending"}"#).unwrap();

        assert!(words.is_empty());
    }

    #[test]
    fn test_malformed_json_propagates() {
        assert!(load_transcript_json("not json").is_err());
    }

    #[test]
    fn test_missing_file_propagates() {
        assert!(load_transcript_file(Path::new("/nonexistent/t.json")).is_err());
    }
}
