// Pitch quantization
// Maps a frequency estimate to the nearest equal-tempered semitone label

use crate::melody::types::NoteName;

/// Reference tuning: A4 = 440 Hz = MIDI 69
const A4_HZ: f64 = 440.0;
const A4_MIDI: f64 = 69.0;
const SEMITONES_PER_OCTAVE: f64 = 12.0;

/// Quantize a frequency to the nearest semitone label.
///
/// Monotonic in frequency; ties between adjacent semitones round upward
/// (`f64::round` is half-away-from-zero, which is half-up for the positive
/// offsets produced by audible frequencies).
pub fn quantize_frequency(frequency_hz: f64) -> NoteName {
    let semitones = A4_MIDI + SEMITONES_PER_OCTAVE * (frequency_hz / A4_HZ).log2();
    NoteName {
        midi: semitones.round() as i32,
    }
}
