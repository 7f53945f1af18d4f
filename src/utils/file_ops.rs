use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Default extensions picked up when scanning a library.
pub const DEFAULT_EXTENSIONS: &[&str] = &["flac", "mp3", "ogg", "opus", "m4a", "wav"];

/// Checks `ext` (with or without its leading dot) against `exts`. Case-sensitive.
pub fn is_valid_ext(exts: &[&str], ext: &str) -> bool {
    if ext.is_empty() {
        return false;
    }

    let ext = ext.strip_prefix('.').unwrap_or(ext);
    exts.contains(&ext)
}

/// Walks `dir` recursively and returns regular files with a valid extension,
/// ordered by file name.
pub fn collect_audio_files(dir: &Path, exts: &[&str]) -> Vec<DirEntry> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Error accessing entry: {}", err);
                None
            }
        })
        .filter(|e| {
            if !e.file_type().is_file() {
                return false;
            }
            let has_valid_ext = e
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| is_valid_ext(exts, ext));
            if !has_valid_ext {
                log::debug!("Skipping non-audio file: {}", e.path().display());
            }
            has_valid_ext
        })
        .collect()
}
