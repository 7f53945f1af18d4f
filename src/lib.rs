use std::collections::BTreeMap;
use std::path::PathBuf;
use serde::Serialize;

pub mod audio;
pub mod utils;
pub mod cli;

/// Normalized description of one audio file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackDescriptor {
    pub path: PathBuf,
    pub number: u32,
    pub name: String,
    /// Whole seconds, truncated.
    pub duration: u64,
    /// Keys are always lowercase.
    pub tags: BTreeMap<String, String>,
}

impl TrackDescriptor {
    /// Reads a numeric tag such as `track = "3/12"` and returns the leading number.
    pub fn tag_number(&self, key: &str) -> Option<u32> {
        let value = self.tags.get(key)?;
        let value = value.split('/').next().unwrap_or(value);
        value.trim().parse().ok()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),
    #[error("Probe failed for {}: {source}", .path.display())]
    ProbeFailed {
        path: PathBuf,
        #[source]
        source: ProbeError,
    },
    #[error("Malformed probe output: {0}")]
    MalformedProbeOutput(#[from] serde_json::Error),
    #[error("Invalid stream duration: {0:?}")]
    InvalidDuration(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TrackError>;

// Re-exports for convenience
pub use audio::filename::{parse_filename, ParsedFilename};
pub use audio::metadata::{probe_track, resolve_track, DirectoryScan, ProbeResult, TagSource, TrackResolver};
pub use audio::probe::{FfprobeProber, ProbeError, Prober};
