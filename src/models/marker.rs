use serde::{Deserialize, Serialize};

/// Action families a trigger phrase can map to - restricted enum so
/// configuration typos fail at parse time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerAction {
    /// Insert a sound effect at the trigger time
    Sfx,
}

/// Configured payload for one trigger phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfxCue {
    /// What to do when the phrase is spoken
    pub action: MarkerAction,
    /// Sound-effect file reference handed to the audio collaborator
    pub file: String,
}

/// A single detected trigger occurrence, destined for an audio or
/// visual insertion downstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfxMarker {
    /// Trigger time in seconds (start of the matched phrase)
    pub time: f64,
    pub action: MarkerAction,
    pub file: String,
}

impl SfxMarker {
    /// The visible placeholder token attached to the annotated word
    pub fn placeholder(&self) -> String {
        format!("{{sfx:{}}}", self.file)
    }
}
