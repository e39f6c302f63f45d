use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::matcher::find_phrase_matches;
use crate::models::{SfxCue, SfxMarker, Word};

/// Configuration for trigger-phrase detection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SfxConfig {
    /// Lowercase trigger phrase mapped to the cue it fires
    pub triggers: HashMap<String, SfxCue>,
}

impl SfxConfig {
    /// Load a trigger map from a JSON config file.
    ///
    /// The file is a flat object:
    /// `{"kaboom": {"action": "sfx", "file": "boom.wav"}}`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read SFX config: {:?}", path))?;
        let triggers: HashMap<String, SfxCue> =
            serde_json::from_str(&content).context("Failed to parse SFX config")?;
        Ok(Self { triggers })
    }
}

/// Detect trigger phrases and emit one marker per occurrence.
///
/// Markers carry the start time of the first matched word and come back
/// in transcript order. Unlike filler cuts, markers are never merged:
/// distinct triggers are independent events.
pub fn select_sfx_markers(words: &[Word], config: &SfxConfig) -> Vec<SfxMarker> {
    let phrases: Vec<String> = config.triggers.keys().cloned().collect();

    let markers: Vec<SfxMarker> = find_phrase_matches(words, &phrases)
        .iter()
        .filter_map(|m| {
            config.triggers.get(&m.phrase).map(|cue| SfxMarker {
                time: words[m.start_index].start,
                action: cue.action,
                file: cue.file.clone(),
            })
        })
        .collect();

    info!(
        "Selected {} SFX markers from {} configured triggers",
        markers.len(),
        config.triggers.len()
    );
    markers
}

/// Attach each marker's placeholder to the first word whose start is at
/// or after the trigger time, keeping the original text as a suffix.
///
/// Word count and ordering are unchanged; only the annotated words'
/// text is touched. A marker past the end of the transcript is dropped
/// silently - that is not an error.
pub fn annotate_words_with_sfx(words: &[Word], markers: &[SfxMarker]) -> Vec<Word> {
    let mut annotated: Vec<Word> = words.to_vec();
    let mut dropped = 0usize;

    for marker in markers {
        match annotated.iter_mut().find(|w| w.start >= marker.time) {
            Some(word) => {
                word.text = if word.text.is_empty() {
                    marker.placeholder()
                } else {
                    format!("{} {}", marker.placeholder(), word.text)
                };
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("Dropped {} markers past the end of the transcript", dropped);
    }
    annotated
}
