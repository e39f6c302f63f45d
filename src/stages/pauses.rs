use thiserror::Error;
use tracing::debug;

use crate::models::{PauseSpan, Word};

/// Configuration for silence detection and padding
#[derive(Debug, Clone)]
pub struct PauseConfig {
    /// Gaps strictly longer than this many seconds are reported
    pub max_pause_seconds: f64,
    /// Pad applied at the leading edge of each silence span, in milliseconds
    pub pad_pre_ms: f64,
    /// Pad applied at the trailing edge of each silence span, in milliseconds
    pub pad_post_ms: f64,
}

impl Default for PauseConfig {
    fn default() -> Self {
        Self {
            max_pause_seconds: 1.5,
            pad_pre_ms: 100.0,
            pad_post_ms: 100.0,
        }
    }
}

/// Invalid stage configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

impl PauseConfig {
    /// Reject malformed settings before any span arithmetic runs.
    ///
    /// Pads may be negative (a negative pad shrinks the trimmed silence
    /// instead of growing it); the threshold may not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("max_pause_seconds", self.max_pause_seconds),
            ("pad_pre_ms", self.pad_pre_ms),
            ("pad_post_ms", self.pad_post_ms),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if self.max_pause_seconds < 0.0 {
            return Err(ConfigError::Negative {
                field: "max_pause_seconds",
                value: self.max_pause_seconds,
            });
        }
        Ok(())
    }
}

/// Find silence gaps between consecutive words that exceed the
/// configured threshold.
///
/// Spans are in seconds, ordered by occurrence. No merging happens
/// here: each gap between adjacent words is already maximal.
pub fn detect_pauses(words: &[Word], config: &PauseConfig) -> Vec<PauseSpan> {
    let mut spans = Vec::new();

    for pair in words.windows(2) {
        let gap = pair[1].start - pair[0].end;
        if gap > config.max_pause_seconds {
            spans.push(PauseSpan {
                start: pair[0].end,
                end: pair[1].start,
            });
        }
    }

    debug!(
        "Found {} pauses over {:.2}s",
        spans.len(),
        config.max_pause_seconds
    );
    spans
}

/// Pad a single silence span: the pre pad moves the start earlier, the
/// post pad moves the end later.
///
/// A pad that would invert the span (possible with negative pads)
/// collapses it back to the unpadded original rather than producing a
/// negative-width interval. The start never goes below zero.
pub fn pad_span(span: PauseSpan, pre_seconds: f64, post_seconds: f64) -> PauseSpan {
    let start = (span.start - pre_seconds).max(0.0);
    let end = span.end + post_seconds;

    if start > end {
        return span;
    }

    PauseSpan { start, end }
}

/// Apply the configured pads to every detected silence span.
///
/// One output span per input span, same ordering, every result
/// satisfying `start <= end`.
pub fn guard_and_pad(spans: &[PauseSpan], config: &PauseConfig) -> Vec<PauseSpan> {
    spans
        .iter()
        .map(|span| {
            pad_span(
                *span,
                config.pad_pre_ms / 1000.0,
                config.pad_post_ms / 1000.0,
            )
        })
        .collect()
}

/// Rebuild the word sequence that accompanies the padded trim spans.
///
/// Timings are copied unchanged: the downstream waveform editor
/// consumes the trim spans against the original timeline, so shifting
/// word timestamps here would double-apply the cut. Always returns a
/// fresh vector, never an alias of the input.
pub fn retime_words(words: &[Word], padded_spans: &[PauseSpan], _config: &PauseConfig) -> Vec<Word> {
    debug!(
        "Carrying {} words across {} trim spans, timeline unchanged",
        words.len(),
        padded_spans.len()
    );
    words.to_vec()
}
