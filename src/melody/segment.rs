// Note segmentation
// Groups contiguous equal-pitch frames into runs and drops spurious short ones

use crate::melody::quantize::quantize_frequency;
use crate::melody::types::{NoteName, PitchRun};
use crate::tracker::PitchFrame;

/// Configuration for the frame-to-run segmentation pass
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Frames at or below this voicing confidence are treated as unvoiced.
    /// Deliberately permissive so quiet, breathy whistling survives; the
    /// minimum-run filter absorbs the resulting single-frame glitches.
    pub confidence_threshold: f64,

    /// Runs spanning fewer frames than this are discarded
    pub min_run_frames: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        SegmenterConfig {
            confidence_threshold: 0.3,
            min_run_frames: 2,
        }
    }
}

/// Pending run accumulator, local to one segmentation pass
struct RunState {
    note: Option<NoteName>,
    frame_count: usize,
}

impl RunState {
    /// Finalize the pending run into `runs` if it meets the minimum length,
    /// then clear the accumulator either way
    fn flush(&mut self, min_run_frames: usize, runs: &mut Vec<PitchRun>) {
        if let Some(note) = self.note.take() {
            if self.frame_count >= min_run_frames {
                runs.push(PitchRun {
                    note,
                    frame_count: self.frame_count,
                });
            }
        }
        self.frame_count = 0;
    }
}

/// Segment a frame sequence into pitch runs.
///
/// Single left-to-right pass. A run ends on a pitch change, on any
/// unvoiced/below-threshold frame, or at the end of input. A dropped short
/// run never merges its neighbors: the accumulator resets and the next
/// voiced frame starts a fresh run even if its label matches the run before
/// the gap. Non-finite frequencies count as unvoiced.
pub fn segment(frames: &[PitchFrame], config: &SegmenterConfig) -> Vec<PitchRun> {
    let mut runs = Vec::new();
    let mut state = RunState {
        note: None,
        frame_count: 0,
    };

    for frame in frames {
        let voiced = frame
            .frequency_hz
            .filter(|f| f.is_finite() && frame.confidence > config.confidence_threshold);

        match voiced {
            Some(frequency) => {
                let note = quantize_frequency(frequency);
                if state.note == Some(note) {
                    state.frame_count += 1;
                } else {
                    state.flush(config.min_run_frames, &mut runs);
                    state.note = Some(note);
                    state.frame_count = 1;
                }
            }
            None => state.flush(config.min_run_frames, &mut runs),
        }
    }
    state.flush(config.min_run_frames, &mut runs);

    runs
}
