// Pipeline module
// Orchestrates the full recording-to-notes pipeline

pub mod transcribe;

pub use transcribe::{
    transcribe_file, transcribe_frames, transcribe_samples, TranscribeError, TranscriptionConfig,
};
