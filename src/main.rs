use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use roughcut::{
    annotate_words_with_sfx, build_filler_cuts, detect_pauses, guard_and_pad, load_transcript_file,
    remove_fillers, retime_words, select_sfx_markers, write_edit_decisions, write_nopunct_sidecar,
    write_working_json, EditDecisionList, FillerConfig, PauseConfig, SfxConfig, Word,
};

#[derive(Parser)]
#[command(name = "roughcut")]
#[command(author, version, about = "Transcript-driven audio edit decision pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StageArgs {
    /// Comma-separated filler phrases (overrides the built-in list)
    #[arg(long)]
    fillers: Option<String>,

    /// Gaps longer than this many seconds are trimmed
    #[arg(long, default_value = "1.5")]
    max_pause_seconds: f64,

    /// Leading-edge pad for each silence span, in milliseconds
    #[arg(long, default_value = "100")]
    pad_pre_ms: f64,

    /// Trailing-edge pad for each silence span, in milliseconds
    #[arg(long, default_value = "100")]
    pad_post_ms: f64,

    /// JSON file mapping trigger phrases to SFX cues
    #[arg(long)]
    sfx_config: Option<PathBuf>,

    /// Skip filler blanking
    #[arg(long)]
    skip_fillers: bool,

    /// Skip silence detection and padding
    #[arg(long)]
    skip_pauses: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the edit pipeline and write the transcript artifacts
    Process {
        /// Input transcript file (JSON array of words)
        #[arg(short, long)]
        input: PathBuf,

        /// Base name for output artifacts
        #[arg(short, long)]
        output_name: String,

        /// Directory for output artifacts
        #[arg(long, default_value = "transcripts")]
        out_dir: PathBuf,

        #[command(flatten)]
        stages: StageArgs,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report what the pipeline would edit without writing anything
    Analyze {
        /// Input transcript file (JSON array of words)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        stages: StageArgs,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output_name,
            out_dir,
            stages,
            verbose,
        } => {
            setup_logging(verbose);
            process_transcript(input, output_name, out_dir, stages)
        }
        Commands::Analyze {
            input,
            stages,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_transcript(input, stages)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn filler_config(args: &StageArgs) -> FillerConfig {
    match &args.fillers {
        Some(list) => FillerConfig {
            phrases: list
                .split(',')
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        },
        None => FillerConfig::default(),
    }
}

fn pause_config(args: &StageArgs) -> Result<PauseConfig> {
    let config = PauseConfig {
        max_pause_seconds: args.max_pause_seconds,
        pad_pre_ms: args.pad_pre_ms,
        pad_post_ms: args.pad_post_ms,
    };
    config.validate()?;
    Ok(config)
}

fn process_transcript(
    input: PathBuf,
    output_name: String,
    out_dir: PathBuf,
    stages: StageArgs,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let mut words = load_transcript_file(&input).context("Failed to load input transcript")?;
    info!("Loaded {} words", words.len());

    let mut edits = EditDecisionList::default();

    if !stages.skip_fillers {
        let config = filler_config(&stages);
        // Cut spans must come from the unblanked words - blanking erases
        // the very text the matcher looks for
        edits.filler_cuts = build_filler_cuts(&words, &config);
        let result = remove_fillers(&words, &config);
        words = result.words;
    }

    if !stages.skip_pauses {
        let config = pause_config(&stages)?;
        let pauses = detect_pauses(&words, &config);
        let padded = guard_and_pad(&pauses, &config);
        info!(
            "Found {} pauses over {:.2}s, padded for trimming",
            padded.len(),
            config.max_pause_seconds
        );
        words = retime_words(&words, &padded, &config);
        edits.pause_trims = padded;
    }

    if let Some(path) = &stages.sfx_config {
        let config = SfxConfig::from_file(path)?;
        let markers = select_sfx_markers(&words, &config);
        words = annotate_words_with_sfx(&words, &markers);
        edits.markers = markers;
    }

    if edits.is_empty() {
        info!("No edit decisions for this transcript");
    }

    let working = write_working_json(&words, &output_name, &out_dir)?;
    write_nopunct_sidecar(&words, &output_name, &out_dir)?;
    write_edit_decisions(&edits, &output_name, &out_dir)?;

    info!("Working transcript written to {:?}", working);
    Ok(())
}

fn analyze_transcript(input: PathBuf, stages: StageArgs) -> Result<()> {
    info!("Analyzing transcript from {:?}", input);
    let words = load_transcript_file(&input).context("Failed to load input transcript")?;

    println!("Transcript Analysis");
    println!("==================");
    println!("Total words: {}", words.len());
    println!("Duration: {:.1}s", duration_seconds(&words));

    let speakers: std::collections::BTreeSet<&str> = words
        .iter()
        .filter_map(|w| w.speaker.as_deref())
        .collect();
    if !speakers.is_empty() {
        println!("Speakers: {:?}", speakers);
    }
    println!();

    let fillers = filler_config(&stages);
    let cuts = build_filler_cuts(&words, &fillers);
    let cut_ms: u64 = cuts.iter().map(|c| c.duration_ms()).sum();
    println!("Filler cuts: {} ({} ms of audio)", cuts.len(), cut_ms);

    let pause_cfg = pause_config(&stages)?;
    let pauses = detect_pauses(&words, &pause_cfg);
    let pause_secs: f64 = pauses.iter().map(|p| p.duration()).sum();
    println!(
        "Pauses over {:.2}s: {} ({:.1}s of silence)",
        pause_cfg.max_pause_seconds,
        pauses.len(),
        pause_secs
    );

    if let Some(path) = &stages.sfx_config {
        let config = SfxConfig::from_file(path)?;
        let markers = select_sfx_markers(&words, &config);
        println!("SFX markers: {}", markers.len());
        for marker in &markers {
            println!("  {:.2}s -> {}", marker.time, marker.file);
        }
    }

    Ok(())
}

fn duration_seconds(words: &[Word]) -> f64 {
    match (words.first(), words.last()) {
        (Some(first), Some(last)) => (last.end - first.start).max(0.0),
        _ => 0.0,
    }
}
