// Pitch tracking types
// Per-hop pitch frames and tracker tuning

/// One analysis frame from the pitch tracker: an optional fundamental
/// frequency and a voicing confidence score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchFrame {
    /// Estimated fundamental in Hz, absent when no pitch was detected
    pub frequency_hz: Option<f64>,

    /// Voicing confidence in [0.0, 1.0]
    pub confidence: f64,
}

impl PitchFrame {
    /// Frame carrying a detected fundamental. Confidence is clamped into
    /// [0, 1]; out-of-range scores are a caller contract violation and are
    /// not worth failing over.
    pub fn voiced(frequency_hz: f64, confidence: f64) -> Self {
        PitchFrame {
            frequency_hz: Some(frequency_hz),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Frame with no detectable pitch
    pub fn unvoiced() -> Self {
        PitchFrame {
            frequency_hz: None,
            confidence: 0.0,
        }
    }

    /// Whether the tracker reported a fundamental for this frame
    pub fn is_voiced(&self) -> bool {
        self.frequency_hz.is_some()
    }
}

/// Analysis rate the downstream duration thresholds were tuned against
const TARGET_FRAME_RATE: usize = 43;

/// Windowing and detection settings for the pitch tracker
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Analysis window length in samples
    pub window_size: usize,

    /// Advance between windows in samples; one output frame per hop
    pub hop_size: usize,

    /// Minimum signal power for a window to be considered at all
    pub power_threshold: f64,

    /// Detections below this frequency are reported as unvoiced (default C3)
    pub min_frequency_hz: f64,

    /// Detections above this frequency are reported as unvoiced (default C7)
    pub max_frequency_hz: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            window_size: 2048,
            hop_size: 512,
            power_threshold: 0.5,
            min_frequency_hz: 130.81,
            max_frequency_hz: 2093.0,
        }
    }
}

impl TrackerConfig {
    /// Size the hop and window for a given sample rate so the frame rate
    /// stays near the 43 frames/s the duration thresholds assume. The hop
    /// is rounded down to a multiple of 64; at 22 050 Hz this reproduces
    /// the default 2048/512 tuning.
    pub fn for_sample_rate(sample_rate: u32) -> Self {
        let hop_size = (sample_rate as usize / TARGET_FRAME_RATE / 64).max(1) * 64;
        TrackerConfig {
            window_size: hop_size * 4,
            hop_size,
            ..TrackerConfig::default()
        }
    }

    /// Output frame rate at the given sample rate
    pub fn frames_per_second(&self, sample_rate: u32) -> f64 {
        sample_rate as f64 / self.hop_size as f64
    }
}
