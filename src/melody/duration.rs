// Duration classification
// Maps a run's frame count to a coarse duration class

use crate::melody::types::{DurationClass, NoteEvent, PitchRun};

/// Frame-count thresholds for the duration classes.
///
/// The defaults assume the analysis rate of the default tracker tuning
/// (roughly 43 frames per second); callers running a different hop rate
/// must scale these to keep the classes proportional to wall-clock time.
#[derive(Debug, Clone)]
pub struct DurationConfig {
    /// Longest frame count still classified Short
    pub short_max_frames: usize,

    /// Longest frame count still classified Medium; anything above is Long
    pub medium_max_frames: usize,
}

impl Default for DurationConfig {
    fn default() -> Self {
        DurationConfig {
            short_max_frames: 15,
            medium_max_frames: 35,
        }
    }
}

/// Classify a run length. Pure and total; depends on the frame count alone.
pub fn classify(frame_count: usize, config: &DurationConfig) -> DurationClass {
    if frame_count > config.medium_max_frames {
        DurationClass::Long
    } else if frame_count > config.short_max_frames {
        DurationClass::Medium
    } else {
        DurationClass::Short
    }
}

/// Attach duration classes to finalized runs, preserving order
pub fn classify_runs(runs: Vec<PitchRun>, config: &DurationConfig) -> Vec<NoteEvent> {
    runs.into_iter()
        .map(|run| NoteEvent {
            note: run.note,
            frame_count: run.frame_count,
            duration: classify(run.frame_count, config),
        })
        .collect()
}
