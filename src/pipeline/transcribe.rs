// Transcription pipeline
// File → clip → pitch frames → segmented, duration-classified note events

use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::audio::{self, AudioError};
use crate::melody::{classify_runs, segment, DurationConfig, NoteEvent, SegmenterConfig};
use crate::tracker::{track_pitch, PitchFrame, TrackerConfig};

/// Failure at the pitch-estimation collaborator boundary. The analysis core
/// below this point is pure and cannot fail; only getting a frame sequence
/// out of a recording can.
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("pitch estimation failed: {0}")]
    Estimation(#[from] AudioError),
}

/// Settings for a full transcription pass
#[derive(Debug, Clone, Default)]
pub struct TranscriptionConfig {
    /// Tracker tuning; `None` sizes the window to the clip's sample rate so
    /// the frame rate matches what the duration thresholds assume
    pub tracker: Option<TrackerConfig>,

    /// Segmentation thresholds
    pub segmenter: SegmenterConfig,

    /// Duration-class thresholds
    pub duration: DurationConfig,
}

/// Transcribe a WAV recording into a note sequence
pub fn transcribe_file(
    path: &Path,
    config: &TranscriptionConfig,
) -> Result<Vec<NoteEvent>, TranscribeError> {
    let clip = audio::load_wav(path)?;
    info!(
        "loaded {}: {:.2} s of audio at {} Hz",
        path.display(),
        clip.duration_secs(),
        clip.sample_rate
    );
    Ok(transcribe_samples(&clip.samples, clip.sample_rate, config))
}

/// Transcribe an already-decoded mono signal. Infallible: a signal the
/// tracker cannot window simply produces no notes.
pub fn transcribe_samples(
    samples: &[f32],
    sample_rate: u32,
    config: &TranscriptionConfig,
) -> Vec<NoteEvent> {
    let tracker = config
        .tracker
        .clone()
        .unwrap_or_else(|| TrackerConfig::for_sample_rate(sample_rate));

    let frames = track_pitch(samples, sample_rate, &tracker);
    debug!(
        "{} pitch frames at {:.1} frames/s",
        frames.len(),
        tracker.frames_per_second(sample_rate)
    );

    let notes = transcribe_frames(&frames, &config.segmenter, &config.duration);
    info!("transcribed {} notes", notes.len());
    notes
}

/// The pure core: segment a frame sequence and classify run durations
pub fn transcribe_frames(
    frames: &[PitchFrame],
    segmenter: &SegmenterConfig,
    duration: &DurationConfig,
) -> Vec<NoteEvent> {
    classify_runs(segment(frames, segmenter), duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melody::DurationClass;
    use std::f64::consts::PI;

    const SAMPLE_RATE: u32 = 22_050;

    fn push_sine(samples: &mut Vec<f32>, frequency_hz: f64, seconds: f64) {
        let count = (seconds * SAMPLE_RATE as f64) as usize;
        samples.extend((0..count).map(|i| {
            let t = i as f64 / SAMPLE_RATE as f64;
            (2.0 * PI * frequency_hz * t).sin() as f32 * 0.5
        }));
    }

    fn push_silence(samples: &mut Vec<f32>, seconds: f64) {
        let count = (seconds * SAMPLE_RATE as f64) as usize;
        samples.extend(std::iter::repeat(0.0f32).take(count));
    }

    #[test]
    fn test_two_tone_clip() {
        // A long A5 whistle, a breath of silence, then a short C6
        let mut samples = Vec::new();
        push_sine(&mut samples, 880.0, 1.5);
        push_silence(&mut samples, 0.5);
        push_sine(&mut samples, 1046.5, 0.3);

        let notes = transcribe_samples(&samples, SAMPLE_RATE, &TranscriptionConfig::default());

        assert_eq!(notes.len(), 2, "expected two notes, got {:?}", notes);
        assert_eq!(notes[0].note.to_string(), "A5");
        assert_eq!(notes[0].duration, DurationClass::Long);
        assert_eq!(notes[1].note.to_string(), "C6");
        assert_eq!(notes[1].duration, DurationClass::Short);
    }

    #[test]
    fn test_silence_transcribes_to_nothing() {
        let mut samples = Vec::new();
        push_silence(&mut samples, 1.0);

        let notes = transcribe_samples(&samples, SAMPLE_RATE, &TranscriptionConfig::default());
        assert!(notes.is_empty());
    }

    #[test]
    fn test_empty_signal_transcribes_to_nothing() {
        let notes = transcribe_samples(&[], SAMPLE_RATE, &TranscriptionConfig::default());
        assert!(notes.is_empty());
    }

    #[test]
    fn test_transcribe_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whistle.wav");

        let mut samples = Vec::new();
        push_sine(&mut samples, 880.0, 1.0);

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for &s in &samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();

        let notes = transcribe_file(&path, &TranscriptionConfig::default()).unwrap();
        assert!(!notes.is_empty());
        assert!(notes.iter().all(|n| n.note.to_string() == "A5"));
    }

    #[test]
    fn test_unreadable_recording_is_a_boundary_error() {
        let result = transcribe_file(
            Path::new("/nonexistent/take.wav"),
            &TranscriptionConfig::default(),
        );
        assert!(matches!(result, Err(TranscribeError::Estimation(_))));
    }
}
