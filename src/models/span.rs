use serde::{Deserialize, Serialize};

/// A span of audio to excise, in integer milliseconds.
///
/// This is the filler stage's unit; the pause stage works in seconds
/// (`PauseSpan`). Each stage's contract states its unit explicitly and
/// callers never convert implicitly between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutSpan {
    /// Start of the cut in milliseconds
    pub start_ms: u64,
    /// End of the cut in milliseconds
    pub end_ms: u64,
}

impl CutSpan {
    /// Duration of this cut in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// A zero-length span is legal and means "no effect"
    pub fn is_empty(&self) -> bool {
        self.end_ms <= self.start_ms
    }
}

/// Merge contiguous or overlapping cut spans into the minimal disjoint
/// set. Two spans merge when `next.start_ms <= current.end_ms`. The
/// input must already be sorted by start time; the output preserves
/// that ordering.
pub fn merge_cut_spans(spans: &[CutSpan]) -> Vec<CutSpan> {
    let mut merged: Vec<CutSpan> = Vec::with_capacity(spans.len());

    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start_ms <= last.end_ms => {
                last.end_ms = last.end_ms.max(span.end_ms);
            }
            _ => merged.push(*span),
        }
    }

    merged
}

/// A silence span between spoken words, in floating seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PauseSpan {
    /// Start of the silence in seconds
    pub start: f64,
    /// End of the silence in seconds
    pub end: f64,
}

impl PauseSpan {
    /// Duration of this silence in seconds
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}
