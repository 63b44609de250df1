// Audio ingestion module
// WAV decoding and mono normalization for the analysis pipeline

pub mod ingest;

pub use ingest::{load_wav, AudioClip, AudioError};
