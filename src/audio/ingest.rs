// Audio ingestion
// Reads WAV recordings and normalizes them to a mono f32 signal

use std::path::Path;

use hound::{SampleFormat, WavReader};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to read WAV file: {0}")]
    Read(#[from] hound::Error),

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
}

/// A decoded recording, ready for pitch analysis
#[derive(Debug, Clone)]
pub struct AudioClip {
    /// Mono samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Channel count of the source file before the mono downmix
    pub source_channels: u16,

    /// Duration in milliseconds
    pub duration_ms: i64,
}

impl AudioClip {
    /// Duration in seconds as f64
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

/// Load a WAV file and downmix it to mono.
///
/// Integer PCM at 8/16/24/32 bits and 32-bit float are supported; anything
/// else is rejected. No resampling happens here: the clip keeps the file's
/// native rate and the tracker is sized to it instead.
pub fn load_wav(path: &Path) -> Result<AudioClip, AudioError> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let raw: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader.samples::<f32>().collect::<Result<_, _>>()?,
        (SampleFormat::Int, 8) => {
            // 8-bit WAV is unsigned, centered on 128
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| (v as f32 - 128.0) / 128.0))
                .collect::<Result<_, _>>()?
        }
        (SampleFormat::Int, bits @ (16 | 24 | 32)) => {
            let scale = (1i64 << (bits - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()?
        }
        (format, bits) => {
            return Err(AudioError::UnsupportedFormat(format!(
                "{:?} {}-bit",
                format, bits
            )));
        }
    };

    let samples = downmix(&raw, spec.channels);
    let duration_ms = (samples.len() as f64 / spec.sample_rate as f64 * 1000.0) as i64;

    Ok(AudioClip {
        samples,
        sample_rate: spec.sample_rate,
        source_channels: spec.channels,
        duration_ms,
    })
}

/// Average interleaved channels down to one
fn downmix(samples: &[f32], channels: u16) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }

    let channels = channels as usize;
    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn write_wav(path: &Path, spec: hound::WavSpec, samples: &[f32]) {
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        match spec.sample_format {
            SampleFormat::Float => {
                for &s in samples {
                    writer.write_sample(s).unwrap();
                }
            }
            SampleFormat::Int => {
                for &s in samples {
                    writer.write_sample((s * 32767.0) as i16).unwrap();
                }
            }
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_load_16_bit_mono() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22_050,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let samples: Vec<f32> = (0..22_050)
            .map(|i| (2.0 * PI * 440.0 * i as f32 / 22_050.0).sin() * 0.5)
            .collect();
        write_wav(&path, spec, &samples);

        let clip = load_wav(&path).unwrap();
        assert_eq!(clip.sample_rate, 22_050);
        assert_eq!(clip.source_channels, 1);
        assert_eq!(clip.samples.len(), samples.len());
        assert!((clip.duration_ms - 1000).abs() <= 1);
        assert!(clip.samples.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_load_f32_preserves_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("float.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 44_100,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let samples = vec![0.0f32, 0.25, -0.25, 1.0];
        write_wav(&path, spec, &samples);

        let clip = load_wav(&path).unwrap();
        assert_eq!(clip.samples, samples);
    }

    #[test]
    fn test_stereo_is_averaged_to_mono() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        // Interleaved L/R pairs
        write_wav(&path, spec, &[0.2, 0.4, -0.2, -0.4, 0.0, 0.6]);

        let clip = load_wav(&path).unwrap();
        assert_eq!(clip.source_channels, 2);
        assert_eq!(clip.samples.len(), 3);
        assert!((clip.samples[0] - 0.3).abs() < 1e-6);
        assert!((clip.samples[1] + 0.3).abs() < 1e-6);
        assert!((clip.samples[2] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_wav(Path::new("/nonexistent/take.wav"));
        assert!(matches!(result, Err(AudioError::Read(_))));
    }
}
