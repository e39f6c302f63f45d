pub mod io;
pub mod matcher;
pub mod models;
pub mod stages;

pub use io::{
    load_transcript_file, load_transcript_json, write_edit_decisions, write_nopunct_sidecar,
    write_working_json, EditDecisionList,
};
pub use matcher::{find_phrase_matches, normalize_token, PhraseMatch};
pub use models::{merge_cut_spans, CutSpan, MarkerAction, PauseSpan, SfxCue, SfxMarker, Word};
pub use stages::{
    annotate_words_with_sfx, apply_blank_spans, build_filler_cuts, compute_filler_spans,
    detect_pauses, guard_and_pad, pad_span, remove_fillers, retime_words, select_sfx_markers,
    ConfigError, FillerConfig, FillerResult, FillerStats, PauseConfig, SfxConfig,
};
