// Sifflet command-line interface
// Thin caller boundary around the transcription pipeline

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{error, info};

use sifflet::melody::{DurationConfig, NoteEvent, SegmenterConfig};
use sifflet::notation::{to_records, TranscriptionReport};
use sifflet::pipeline::{transcribe_file, TranscribeError, TranscriptionConfig};
use sifflet::{intake, TrackerConfig};

#[derive(Parser)]
#[command(name = "sifflet")]
#[command(about = "Transcribe whistled recordings into note sequences", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe an audio file in place and print the note records
    Transcribe {
        /// Input WAV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Store a recording under a unique name, then transcribe the stored copy
    Intake {
        /// Incoming audio file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Uploads directory (defaults to the user data directory)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,

        #[command(flatten)]
        tuning: TuningArgs,
    },
}

/// Analysis thresholds, surfaced so a caller running a different pitch
/// estimator hop rate can rescale them
#[derive(Args)]
struct TuningArgs {
    /// Voicing confidence threshold in [0, 1]
    #[arg(long, default_value_t = 0.3)]
    confidence_threshold: f64,

    /// Minimum run length in frames for a note to survive
    #[arg(long, default_value_t = 2)]
    min_run_frames: usize,

    /// Longest frame count still rendered as an eighth note
    #[arg(long, default_value_t = 15)]
    short_max_frames: usize,

    /// Longest frame count still rendered as a quarter note
    #[arg(long, default_value_t = 35)]
    medium_max_frames: usize,

    /// Analysis hop size in samples (defaults to a hop sized for the
    /// recording's sample rate)
    #[arg(long)]
    hop_size: Option<usize>,
}

impl TuningArgs {
    fn to_config(&self) -> TranscriptionConfig {
        TranscriptionConfig {
            tracker: self.hop_size.map(|hop_size| TrackerConfig {
                window_size: hop_size * 4,
                hop_size,
                ..TrackerConfig::default()
            }),
            segmenter: SegmenterConfig {
                confidence_threshold: self.confidence_threshold.clamp(0.0, 1.0),
                min_run_frames: self.min_run_frames,
            },
            duration: DurationConfig {
                short_max_frames: self.short_max_frames,
                medium_max_frames: self.medium_max_frames,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(filter)
        .init();

    match cli.command {
        Commands::Transcribe { input, tuning } => {
            let notes = notes_or_empty(transcribe_file(&input, &tuning.to_config()));
            print_json(&to_records(&notes));
            ExitCode::SUCCESS
        }
        Commands::Intake { input, dir, tuning } => {
            let dir = match dir.map(Ok).unwrap_or_else(intake::uploads_dir) {
                Ok(dir) => dir,
                Err(e) => {
                    error!("cannot resolve uploads directory: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let stored = match intake::store_upload(&input, &dir) {
                Ok(stored) => stored,
                Err(e) => {
                    error!("upload rejected: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            info!(
                "stored upload as {} (sha256 {})",
                stored.path.display(),
                stored.sha256
            );

            let notes = notes_or_empty(transcribe_file(&stored.path, &tuning.to_config()));
            print_json(&TranscriptionReport {
                filename: stored.filename,
                notes: to_records(&notes),
            });
            ExitCode::SUCCESS
        }
    }
}

/// Boundary rule for collaborator failures: report the diagnostic and fall
/// back to an empty transcription instead of crashing the caller
fn notes_or_empty(result: Result<Vec<NoteEvent>, TranscribeError>) -> Vec<NoteEvent> {
    match result {
        Ok(notes) => notes,
        Err(e) => {
            error!("transcription failed: {}", e);
            Vec::new()
        }
    }
}

fn print_json<T: serde::Serialize>(payload: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("note records serialize to JSON")
    );
}
