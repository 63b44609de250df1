// Pitch tracking module
// Turns a mono signal into a time-ordered sequence of pitch frames

pub mod mcleod;
pub mod types;

pub use mcleod::track_pitch;
pub use types::{PitchFrame, TrackerConfig};
