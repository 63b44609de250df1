// Frame pitch source
// Slides an analysis window over the signal and runs the McLeod pitch
// detector once per hop, emitting one PitchFrame per window

use log::debug;
use pitch_detection::detector::mcleod::McLeodDetector;
use pitch_detection::detector::PitchDetector;

use crate::tracker::types::{PitchFrame, TrackerConfig};

/// Estimate a fundamental frequency per hop across the whole signal.
///
/// Detections outside the configured frequency band are reported as
/// unvoiced rather than dropped, so the output always carries exactly one
/// frame per hop position. Input shorter than one window yields no frames.
pub fn track_pitch(samples: &[f32], sample_rate: u32, config: &TrackerConfig) -> Vec<PitchFrame> {
    if samples.len() < config.window_size {
        debug!(
            "signal of {} samples is shorter than one {}-sample window",
            samples.len(),
            config.window_size
        );
        return Vec::new();
    }

    let mut detector = McLeodDetector::new(config.window_size, config.window_size / 2);
    let mut window = vec![0.0f64; config.window_size];
    let mut frames = Vec::with_capacity((samples.len() - config.window_size) / config.hop_size + 1);

    let mut start = 0;
    while start + config.window_size <= samples.len() {
        for (dst, src) in window
            .iter_mut()
            .zip(&samples[start..start + config.window_size])
        {
            *dst = f64::from(*src);
        }

        // Clarity gating happens downstream in the segmenter, so the
        // detector itself only applies the power gate
        let frame = match detector.get_pitch(&window, sample_rate as usize, config.power_threshold, 0.0)
        {
            Some(pitch)
                if pitch.frequency >= config.min_frequency_hz
                    && pitch.frequency <= config.max_frequency_hz =>
            {
                PitchFrame::voiced(pitch.frequency, pitch.clarity)
            }
            _ => PitchFrame::unvoiced(),
        };
        frames.push(frame);

        start += config.hop_size;
    }

    debug!("tracked {} frames at {} Hz", frames.len(), sample_rate);
    frames
}
