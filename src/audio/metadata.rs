use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::audio::filename::parse_filename;
use crate::audio::probe::Prober;
use crate::utils::file_ops::collect_audio_files;
use crate::{Result, TrackDescriptor, TrackError};

/// The subset of ffprobe's `-show_format -show_streams` JSON we read.
#[derive(Debug, Default, Deserialize)]
pub struct RawProbeDescription {
    #[serde(default)]
    pub format: RawFormat,
    #[serde(default)]
    pub streams: Vec<RawStream>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawFormat {
    #[serde(default)]
    pub format_name: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawStream {
    #[serde(default)]
    pub codec_type: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl RawStream {
    fn is_audio(&self) -> bool {
        self.codec_type == "audio"
    }
}

/// Where a container keeps the tags that describe the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSource {
    Container,
    /// The last audio stream in the stream list.
    AudioStream,
}

impl TagSource {
    pub fn for_format(format_name: &str) -> Self {
        match format_name {
            // Ogg keeps Vorbis comments on the stream, not the container.
            "ogg" => TagSource::AudioStream,
            _ => TagSource::Container,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub tags: BTreeMap<String, String>,
    pub duration: u64,
}

fn lowercase_keys(tags: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    tags.iter()
        .map(|(key, value)| (key.to_lowercase(), value.clone()))
        .collect()
}

fn parse_duration(raw: &str) -> Result<u64> {
    let secs: f64 = raw
        .parse()
        .map_err(|_| TrackError::InvalidDuration(raw.to_string()))?;
    if !secs.is_finite() {
        return Err(TrackError::InvalidDuration(raw.to_string()));
    }
    // Float to int casts truncate and saturate negatives to zero.
    Ok(secs as u64)
}

impl RawProbeDescription {
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    fn into_probe_result(self) -> Result<ProbeResult> {
        let source = TagSource::for_format(&self.format.format_name);

        let mut duration = 0;
        let mut stream_tags = None;
        for stream in self.streams.iter().filter(|s| s.is_audio()) {
            duration = parse_duration(&stream.duration)?;
            stream_tags = Some(&stream.tags);
        }

        let tags = match source {
            TagSource::Container => lowercase_keys(&self.format.tags),
            TagSource::AudioStream => stream_tags.map(lowercase_keys).unwrap_or_default(),
        };

        Ok(ProbeResult { tags, duration })
    }
}

/// Runs the prober on `path` and normalizes its tags and duration.
pub fn probe_track<P: Prober + ?Sized>(prober: &P, path: &Path) -> Result<ProbeResult> {
    log::debug!("Probing {}", path.display());
    let data = prober.probe(path).map_err(|source| TrackError::ProbeFailed {
        path: path.to_path_buf(),
        source,
    })?;

    RawProbeDescription::from_slice(&data)?.into_probe_result()
}

/// Builds the descriptor for one file from its probe output and its file name.
pub fn resolve_track<P: Prober + ?Sized>(prober: &P, path: impl AsRef<Path>) -> Result<TrackDescriptor> {
    let path = path.as_ref();
    let probed = probe_track(prober, path)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| TrackError::InvalidFilename(path.display().to_string()))?;
    let parsed = parse_filename(file_name)?;

    Ok(TrackDescriptor {
        path: path.to_path_buf(),
        number: parsed.number,
        name: parsed.name,
        duration: probed.duration,
        tags: probed.tags,
    })
}

/// Resolves tracks with an owned prober.
pub struct TrackResolver<P> {
    prober: P,
}

impl<P: Prober> TrackResolver<P> {
    pub fn new(prober: P) -> Self {
        Self { prober }
    }

    pub fn probe_track(&self, path: impl AsRef<Path>) -> Result<ProbeResult> {
        probe_track(&self.prober, path.as_ref())
    }

    pub fn resolve_track(&self, path: impl AsRef<Path>) -> Result<TrackDescriptor> {
        resolve_track(&self.prober, path)
    }

    /// Resolves every audio file under `dir`, one at a time.
    ///
    /// A file that fails to resolve does not stop the scan; it is reported
    /// in [`DirectoryScan::failures`].
    pub fn resolve_directory(&self, dir: impl AsRef<Path>, exts: &[&str]) -> DirectoryScan {
        let dir = dir.as_ref();
        let entries = collect_audio_files(dir, exts);
        log::info!("Found {} candidate audio files in {}", entries.len(), dir.display());

        let mut scan = DirectoryScan::default();
        for entry in &entries {
            match self.resolve_track(entry.path()) {
                Ok(track) => scan.tracks.push(track),
                Err(e) => {
                    log::warn!("Skipping {}: {}", entry.path().display(), e);
                    scan.failures.push((entry.path().to_path_buf(), e));
                }
            }
        }

        log::info!("Resolved {}/{} tracks in {}", scan.tracks.len(), entries.len(), dir.display());
        scan
    }
}

/// Outcome of [`TrackResolver::resolve_directory`].
#[derive(Debug, Default)]
pub struct DirectoryScan {
    pub tracks: Vec<TrackDescriptor>,
    /// Files that failed to resolve, in scan order.
    pub failures: Vec<(PathBuf, TrackError)>,
}
