// Upload intake
// Persists incoming recordings under generated unique names before analysis

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

/// Extensions the ingest layer can actually decode
const AUDIO_EXTENSIONS: [&str; 2] = ["wav", "wave"];

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("failed to resolve user data directory")]
    NoDataDir,
}

pub type IntakeResult<T> = Result<T, IntakeError>;

/// Metadata for a persisted upload
#[derive(Debug, Clone, Serialize)]
pub struct StoredUpload {
    /// Full path of the stored copy
    pub path: PathBuf,

    /// Generated filename: a UUID prefix plus the original name
    pub filename: String,

    /// SHA-256 digest of the stored bytes, hex-encoded
    pub sha256: String,

    /// Stored size in bytes
    pub size_bytes: u64,

    /// When the upload was persisted
    pub stored_at: DateTime<Utc>,
}

/// Default uploads directory under the user data directory
pub fn uploads_dir() -> IntakeResult<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(IntakeError::NoDataDir)?;
    let dir = data_dir.join("sifflet").join("uploads");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Copy an incoming recording into `dir` under a unique generated name.
///
/// Non-audio payloads are rejected up front by extension, before anything
/// touches the disk. Collisions are ruled out by the UUID prefix.
pub fn store_upload(source: &Path, dir: &Path) -> IntakeResult<StoredUpload> {
    let extension = source
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some(ext) if AUDIO_EXTENSIONS.contains(&ext) => {}
        other => {
            return Err(IntakeError::UnsupportedMediaType(
                other.unwrap_or("none").to_string(),
            ));
        }
    }

    let original = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.wav");
    let filename = format!("{}_{}", Uuid::new_v4().simple(), original);

    let data = fs::read(source)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(&filename);
    let mut file = fs::File::create(&path)?;
    file.write_all(&data)?;

    let mut hasher = Sha256::new();
    hasher.update(&data);
    let sha256 = hex::encode(hasher.finalize());

    Ok(StoredUpload {
        path,
        filename,
        sha256,
        size_bytes: data.len() as u64,
        stored_at: Utc::now(),
    })
}
