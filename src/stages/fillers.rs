use std::collections::BTreeSet;

use tracing::info;

use crate::matcher::find_phrase_matches;
use crate::models::{merge_cut_spans, CutSpan, Word};

/// Configuration for filler excision
#[derive(Debug, Clone)]
pub struct FillerConfig {
    /// Lowercase trigger phrases, single- or multi-word
    pub phrases: Vec<String>,
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "um".to_string(),
                "uh".to_string(),
                "uhm".to_string(),
                "er".to_string(),
                "erm".to_string(),
                "ah".to_string(),
                "hmm".to_string(),
                "i mean".to_string(),
                "you know".to_string(),
                "sort of".to_string(),
                "kind of".to_string(),
            ],
        }
    }
}

/// Counters reported by the filler pass
#[derive(Debug, Clone, Copy, Default)]
pub struct FillerStats {
    /// Words inspected
    pub words_scanned: usize,
    /// Filler occurrences matched (a multi-word phrase counts once)
    pub phrases_matched: usize,
    /// Words blanked
    pub words_blanked: usize,
}

/// Result of the composed filler pass
#[derive(Debug, Clone)]
pub struct FillerResult {
    /// The word sequence with filler text blanked
    pub words: Vec<Word>,
    pub stats: FillerStats,
}

/// Compute millisecond cut spans for every filler occurrence.
///
/// Contiguous or overlapping spans (`next.start_ms <= current.end_ms`)
/// are merged, so the output is the minimal disjoint set, sorted by
/// start time. These spans go to the waveform-cutting collaborator;
/// the transcript itself is edited via `apply_blank_spans`.
pub fn build_filler_cuts(words: &[Word], config: &FillerConfig) -> Vec<CutSpan> {
    let spans: Vec<CutSpan> = find_phrase_matches(words, &config.phrases)
        .iter()
        .map(|m| CutSpan {
            start_ms: words[m.start_index].start_ms(),
            end_ms: words[m.end_index].end_ms(),
        })
        .collect();

    merge_cut_spans(&spans)
}

/// Indices of every word covered by a matched filler phrase.
///
/// Index sets are the cheap view for in-place blanking; the merged
/// millisecond spans from `build_filler_cuts` are the view audio
/// collaborators consume. Both derive from the same matcher.
pub fn compute_filler_spans(words: &[Word], config: &FillerConfig) -> BTreeSet<usize> {
    let mut indices = BTreeSet::new();
    for m in find_phrase_matches(words, &config.phrases) {
        indices.extend(m.start_index..=m.end_index);
    }
    indices
}

/// Blank the text of every word at the given indices.
///
/// Timings and speaker tags pass through unchanged and the output has
/// the same length as the input - downstream consumers rely on
/// positional alignment with the original audio timeline. Blanking an
/// already-blank word is a no-op, so the operation is idempotent.
pub fn apply_blank_spans(words: &[Word], indices: &BTreeSet<usize>) -> Vec<Word> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if indices.contains(&i) {
                let mut blanked = word.clone();
                blanked.text.clear();
                blanked
            } else {
                word.clone()
            }
        })
        .collect()
}

/// Composed entry point: match filler phrases, blank them, and report
/// what happened.
pub fn remove_fillers(words: &[Word], config: &FillerConfig) -> FillerResult {
    let matches = find_phrase_matches(words, &config.phrases);

    let mut indices = BTreeSet::new();
    for m in &matches {
        indices.extend(m.start_index..=m.end_index);
    }

    let blanked = apply_blank_spans(words, &indices);
    let stats = FillerStats {
        words_scanned: words.len(),
        phrases_matched: matches.len(),
        words_blanked: indices.len(),
    };

    info!(
        "Blanked {} of {} words ({} filler occurrences)",
        stats.words_blanked, stats.words_scanned, stats.phrases_matched
    );

    FillerResult {
        words: blanked,
        stats,
    }
}
