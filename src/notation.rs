// Notation records
// Wire-format note records consumed by the score renderer

use serde::{Deserialize, Serialize};

use crate::melody::NoteEvent;

/// One transcribed note as the rendering layer expects it: a pitch label,
/// the raw run length, and the notation length suffix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Pitch label, e.g. "A4" or "C#5"
    pub pitch: String,

    /// Run length in analysis frames
    pub frame_count: usize,

    /// Length suffix: "/2" (eighth), "" (quarter), "2" (half)
    pub duration_symbol: String,
}

impl From<&NoteEvent> for NoteRecord {
    fn from(event: &NoteEvent) -> Self {
        NoteRecord {
            pitch: event.note.to_string(),
            frame_count: event.frame_count,
            duration_symbol: event.duration.symbol().to_string(),
        }
    }
}

/// Convert a note sequence into wire records, preserving order
pub fn to_records(events: &[NoteEvent]) -> Vec<NoteRecord> {
    events.iter().map(NoteRecord::from).collect()
}

/// Payload returned after a stored upload has been analyzed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionReport {
    /// Generated filename the upload was stored under
    pub filename: String,

    /// Transcribed notes in time order
    pub notes: Vec<NoteRecord>,
}
