use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::models::{CutSpan, PauseSpan, SfxMarker, Word};

/// Write the full working transcript, blanked entries included, as
/// indented UTF-8 JSON to `{dir}/{output_name}.json`. The directory is
/// created if absent.
pub fn write_working_json(words: &[Word], output_name: &str, dir: &Path) -> Result<PathBuf> {
    let path = prepare_path(dir, &format!("{}.json", output_name))?;
    write_pretty(&path, &words)?;
    info!("Wrote {} words to {:?}", words.len(), path);
    Ok(path)
}

/// Write the punctuation-stripped sidecar to
/// `{dir}/{output_name}.nopunct.json`.
///
/// Each word's text keeps only word characters, whitespace, and
/// apostrophes, with runs of whitespace collapsed and the ends trimmed;
/// timings and speaker tags are copied unchanged.
pub fn write_nopunct_sidecar(words: &[Word], output_name: &str, dir: &Path) -> Result<PathBuf> {
    let stripped: Vec<Word> = words
        .iter()
        .map(|w| Word {
            text: strip_punctuation(&w.text),
            ..w.clone()
        })
        .collect();

    let path = prepare_path(dir, &format!("{}.nopunct.json", output_name))?;
    write_pretty(&path, &stripped)?;
    info!("Wrote nopunct sidecar with {} words to {:?}", stripped.len(), path);
    Ok(path)
}

/// Everything the downstream audio editor needs to realize the edits
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditDecisionList {
    /// Filler spans to excise, integer milliseconds
    pub filler_cuts: Vec<CutSpan>,
    /// Padded silence spans to trim, seconds
    pub pause_trims: Vec<PauseSpan>,
    /// Trigger events to realize as audio insertions
    pub markers: Vec<SfxMarker>,
}

impl EditDecisionList {
    /// Whether any stage produced an edit decision
    pub fn is_empty(&self) -> bool {
        self.filler_cuts.is_empty() && self.pause_trims.is_empty() && self.markers.is_empty()
    }
}

/// Write the edit decision list to `{dir}/{output_name}.edits.json`.
pub fn write_edit_decisions(
    edits: &EditDecisionList,
    output_name: &str,
    dir: &Path,
) -> Result<PathBuf> {
    let path = prepare_path(dir, &format!("{}.edits.json", output_name))?;
    write_pretty(&path, edits)?;
    info!(
        "Wrote {} cuts, {} trims, {} markers to {:?}",
        edits.filler_cuts.len(),
        edits.pause_trims.len(),
        edits.markers.len(),
        path
    );
    Ok(path)
}

fn prepare_path(dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;
    Ok(dir.join(file_name))
}

fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, value).context("Failed to write JSON")?;
    Ok(())
}

/// Drop everything except word characters, whitespace, and apostrophes,
/// then collapse whitespace runs and trim the ends.
fn strip_punctuation(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '\'' || *c == '_')
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load_transcript_file;
    use crate::models::MarkerAction;

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("mean\u{2014}"), "mean");
        assert_eq!(strip_punctuation("Uh,"), "Uh");
        assert_eq!(strip_punctuation("don't!"), "don't");
        assert_eq!(strip_punctuation("{sfx:boom.wav} Hello."), "sfxboomwav Hello");
        assert_eq!(strip_punctuation(""), "");
    }

    #[test]
    fn test_working_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut tagged = Word::new("world...", 0.9, 1.2);
        tagged.speaker = Some("B".to_string());
        let words = vec![Word::new("Hello,", 0.5, 0.8), tagged, Word::new("", 1.3, 1.4)];

        let path = write_working_json(&words, "ep01", dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "ep01.json");

        let loaded = load_transcript_file(&path).unwrap();
        assert_eq!(loaded, words);
    }

    #[test]
    fn test_nopunct_sidecar_strips_text_only() {
        let dir = tempfile::tempdir().unwrap();
        let words = vec![Word::new("Hello,", 0.5, 0.8), Word::new("mean\u{2014}", 0.9, 1.2)];

        let path = write_nopunct_sidecar(&words, "ep01", dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "ep01.nopunct.json");

        let loaded = load_transcript_file(&path).unwrap();
        assert_eq!(loaded[0].text, "Hello");
        assert_eq!(loaded[1].text, "mean");
        assert_eq!(loaded[0].start, 0.5);
        assert_eq!(loaded[1].end, 1.2);
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("transcripts");

        let path = write_working_json(&[Word::new("hi", 0.0, 0.2)], "ep01", &nested).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_edit_decisions() {
        let dir = tempfile::tempdir().unwrap();
        let edits = EditDecisionList {
            filler_cuts: vec![CutSpan {
                start_ms: 100,
                end_ms: 300,
            }],
            pause_trims: vec![PauseSpan { start: 0.0, end: 2.4 }],
            markers: vec![SfxMarker {
                time: 0.12,
                action: MarkerAction::Sfx,
                file: "boom.wav".to_string(),
            }],
        };

        let path = write_edit_decisions(&edits, "ep01", dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "ep01.edits.json");

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["filler_cuts"][0]["start_ms"], 100);
        assert_eq!(value["markers"][0]["action"], "sfx");
    }
}
