// Sifflet - Whistled melody transcriber
// Module declarations and public API

pub mod audio;
pub mod intake;
pub mod melody;
pub mod notation;
pub mod pipeline;
pub mod tracker;

pub use audio::{load_wav, AudioClip, AudioError};
pub use melody::{
    quantize_frequency, segment, DurationClass, DurationConfig, NoteEvent, NoteName, PitchRun,
    SegmenterConfig,
};
pub use notation::{to_records, NoteRecord, TranscriptionReport};
pub use pipeline::{
    transcribe_file, transcribe_frames, transcribe_samples, TranscribeError, TranscriptionConfig,
};
pub use tracker::{track_pitch, PitchFrame, TrackerConfig};
