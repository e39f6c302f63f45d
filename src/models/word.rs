use serde::{Deserialize, Serialize};

/// A single transcribed word from the upstream ASR service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// The transcribed token, possibly carrying trailing punctuation.
    /// ASR collaborators disagree on the key name, so `word` is accepted
    /// on input; output always uses `text`.
    #[serde(alias = "word")]
    pub text: String,
    /// Start timestamp in seconds
    pub start: f64,
    /// End timestamp in seconds
    pub end: f64,
    /// Opaque speaker tag, passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Word {
    /// Create a word without a speaker tag
    pub fn new(text: &str, start: f64, end: f64) -> Self {
        Self {
            text: text.to_string(),
            start,
            end,
            speaker: None,
        }
    }

    /// Duration of this word in seconds
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Start timestamp in integer milliseconds (truncated)
    pub fn start_ms(&self) -> u64 {
        (self.start * 1000.0) as u64
    }

    /// End timestamp in integer milliseconds (truncated)
    pub fn end_ms(&self) -> u64 {
        (self.end * 1000.0) as u64
    }

    /// Whether this word has been blanked by an earlier stage
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_accepts_word_alias() {
        let json = r#"{"word": "hello", "start": 0.5, "end": 0.8, "speaker": "A"}"#;
        let word: Word = serde_json::from_str(json).unwrap();

        assert_eq!(word.text, "hello");
        assert_eq!(word.start, 0.5);
        assert_eq!(word.end, 0.8);
        assert_eq!(word.speaker, Some("A".to_string()));
    }

    #[test]
    fn test_serialize_uses_text_key() {
        let word = Word::new("hello", 0.5, 0.8);
        let json = serde_json::to_string(&word).unwrap();

        assert!(json.contains("\"text\""));
        assert!(!json.contains("\"speaker\""));
    }

    #[test]
    fn test_millisecond_conversion_truncates() {
        let word = Word::new("hi", 0.1, 0.2);

        assert_eq!(word.start_ms(), 100);
        assert_eq!(word.end_ms(), 200);
        assert!((word.duration() - 0.1).abs() < 1e-9);
    }
}
