use std::path::Path;
use csv::Writer;
use crate::{Result, TrackDescriptor};

pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_track_report(&self, tracks: &[TrackDescriptor], output_path: impl AsRef<Path>) -> Result<()> {
        let output_path_ref = output_path.as_ref();
        let mut writer = Writer::from_path(output_path_ref)?;

        writer.write_record([
            "Path",
            "Number",
            "Name",
            "Duration (s)",
            "Artist",
            "Album",
            "Tag Track",
            "Tag Disc",
        ])?;

        for track in tracks {
            let tag = |key: &str| track.tags.get(key).cloned().unwrap_or_default();
            let tag_number = |key: &str| track.tag_number(key).map_or(String::new(), |n| n.to_string());

            writer.write_record([
                track.path.display().to_string(),
                track.number.to_string(),
                track.name.clone(),
                track.duration.to_string(),
                tag("artist"),
                tag("album"),
                tag_number("track"),
                tag_number("disc"),
            ])?;
        }

        writer.flush()?;
        log::info!("Track report generated: {}", output_path_ref.display());
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    #[test]
    fn writes_one_row_per_track() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("tracks.csv");
        let tracks = [
            TrackDescriptor {
                path: PathBuf::from("/music/01 - intro, part 1.flac"),
                number: 1,
                name: "intro, part 1".into(),
                duration: 63,
                tags: BTreeMap::from([
                    ("artist".to_string(), "Someone".to_string()),
                    ("track".to_string(), "1/9".to_string()),
                    ("disc".to_string(), "1".to_string()),
                ]),
            },
            TrackDescriptor {
                path: PathBuf::from("/music/02.flac"),
                number: 2,
                name: "02.flac".into(),
                duration: 0,
                tags: BTreeMap::new(),
            },
        ];

        Reporter::new().generate_track_report(&tracks, &report).unwrap();

        let mut reader = csv::Reader::from_path(&report).unwrap();
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            vec!["Path", "Number", "Name", "Duration (s)", "Artist", "Album", "Tag Track", "Tag Disc"]
        );
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["/music/01 - intro, part 1.flac", "1", "intro, part 1", "63", "Someone", "", "1", "1"],
                vec!["/music/02.flac", "2", "02.flac", "0", "", "", "", ""],
            ]
        );
    }
}
