// Melody extraction module
// Pitch quantization, note segmentation, and duration classification

pub mod duration;
pub mod quantize;
pub mod segment;
pub mod types;

pub use duration::{classify, classify_runs, DurationConfig};
pub use quantize::quantize_frequency;
pub use segment::{segment, SegmenterConfig};
pub use types::{DurationClass, NoteEvent, NoteName, PitchRun};
