// Melody data types
// Quantized pitch labels, runs, duration classes, and finalized note events

use std::fmt;

/// Pitch class names in ascending semitone order, sharps only
const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A semitone-quantized pitch label
/// Two frequencies map to the same label iff they round to the same semitone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    /// Semitone index in MIDI convention (C4 = 60, A4 = 69)
    pub midi: i32,
}

impl NoteName {
    /// Pitch class name without the octave (e.g., "C#")
    pub fn pitch_class(&self) -> &'static str {
        PITCH_CLASS_NAMES[self.midi.rem_euclid(12) as usize]
    }

    /// Scientific octave number (C4 = middle C)
    pub fn octave(&self) -> i32 {
        self.midi.div_euclid(12) - 1
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}

/// A maximal contiguous block of frames sharing one pitch label,
/// finalized by the segmenter after passing the minimum-length filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchRun {
    /// Quantized pitch shared by every frame in the run
    pub note: NoteName,

    /// Number of analysis frames the run spans
    pub frame_count: usize,
}

/// Coarse duration class assigned from a run's frame count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationClass {
    /// Roughly an eighth note at the assumed frame rate
    Short,

    /// Roughly a quarter note
    Medium,

    /// Roughly a half note
    Long,
}

impl DurationClass {
    /// Notation length suffix understood by the score renderer
    pub fn symbol(&self) -> &'static str {
        match self {
            DurationClass::Short => "/2",
            DurationClass::Medium => "",
            DurationClass::Long => "2",
        }
    }
}

/// A finalized output note: pitch label, run length, and duration class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    /// Quantized pitch of the underlying run
    pub note: NoteName,

    /// Run length in analysis frames
    pub frame_count: usize,

    /// Duration class derived from the frame count
    pub duration: DurationClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_name_display() {
        assert_eq!(NoteName { midi: 69 }.to_string(), "A4");
        assert_eq!(NoteName { midi: 60 }.to_string(), "C4");
        assert_eq!(NoteName { midi: 73 }.to_string(), "C#5");
    }

    #[test]
    fn test_octave_boundary() {
        // B3 and C4 sit on either side of the octave rollover
        assert_eq!(NoteName { midi: 59 }.to_string(), "B3");
        assert_eq!(NoteName { midi: 60 }.octave(), 4);
        assert_eq!(NoteName { midi: 59 }.octave(), 3);
    }

    #[test]
    fn test_duration_symbols() {
        assert_eq!(DurationClass::Short.symbol(), "/2");
        assert_eq!(DurationClass::Medium.symbol(), "");
        assert_eq!(DurationClass::Long.symbol(), "2");
    }

    #[test]
    fn test_label_equality_is_semitone_equality() {
        assert_eq!(NoteName { midi: 69 }, NoteName { midi: 69 });
        assert_ne!(NoteName { midi: 69 }, NoteName { midi: 70 });
    }
}
