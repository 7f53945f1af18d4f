//! Track number and title inference from file names like `03 - Title.flac`.
//!
//! The title ends at the first period after the number, so `01 - a.b.flac`
//! yields the title `a`. Callers depend on this truncation; keep it.

use std::sync::LazyLock;
use regex::Regex;
use crate::{Result, TrackError};

// Leading digits, optional `-`/whitespace/`.` separators, title up to the first period.
static TRACK_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)[-\t\n\x0C\r .]*([^.]*)\.").expect("track name pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    /// The leading digit run. Zero is accepted, so `00 - intro.flac` yields 0.
    pub number: u32,
    /// The title, or the whole basename when the file name carries no title.
    pub name: String,
}

pub fn parse_filename(basename: &str) -> Result<ParsedFilename> {
    let captures = TRACK_NAME_REGEX
        .captures(basename)
        .ok_or_else(|| TrackError::InvalidFilename(basename.to_string()))?;

    let number = captures[1]
        .parse::<u32>()
        .map_err(|e| TrackError::InvalidFilename(format!("{}: {}", basename, e)))?;

    let name = match captures.get(2).map(|m| m.as_str()) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => basename.to_string(),
    };

    Ok(ParsedFilename { number, name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parsed(basename: &str) -> (u32, String) {
        let parsed = parse_filename(basename).unwrap();
        (parsed.number, parsed.name)
    }

    #[test]
    fn parses_number_and_title() {
        let cases = [
            ("01. track.flac", 1, "track"),
            ("02 some track name.flac", 2, "some track name"),
            ("23 - hello world.flac", 23, "hello world"),
            ("100-hello world.flac", 100, "hello world"),
            ("124.hello world.flac", 124, "hello world"),
            ("7\thello.mp3", 7, "hello"),
            ("5Intro.ogg", 5, "Intro"),
        ];

        for (basename, number, name) in cases {
            assert_eq!(parsed(basename), (number, name.to_string()), "{}", basename);
        }
    }

    #[test]
    fn missing_title_falls_back_to_basename() {
        assert_eq!(parsed("03.flac"), (3, "03.flac".to_string()));
        assert_eq!(parsed("10.flac"), (10, "10.flac".to_string()));
        assert_eq!(parsed("04 - .flac"), (4, "04 - .flac".to_string()));
    }

    #[test]
    fn title_stops_at_first_period() {
        assert_eq!(parsed("01 - a.b.flac"), (1, "a".to_string()));
        assert_eq!(parsed("09 - Mr. Blue Sky.flac"), (9, "Mr".to_string()));
    }

    #[test]
    fn leading_zeros_are_ignored() {
        assert_eq!(parsed("007 - bond.flac").0, 7);
    }

    #[test]
    fn all_zero_track_number_is_accepted() {
        assert_eq!(parsed("00 - intro.flac"), (0, "intro".to_string()));
    }

    #[test]
    fn rejects_names_without_leading_digits() {
        for basename in ["track.flac", "", " 01 - track.flac", "one - two.flac"] {
            assert!(
                matches!(parse_filename(basename), Err(TrackError::InvalidFilename(_))),
                "{:?}",
                basename
            );
        }
    }

    #[test]
    fn rejects_names_without_extension() {
        assert!(matches!(parse_filename("01 - track"), Err(TrackError::InvalidFilename(_))));
    }

    #[test]
    fn rejects_numbers_that_overflow() {
        assert!(matches!(
            parse_filename("99999999999 - track.flac"),
            Err(TrackError::InvalidFilename(_))
        ));
    }

    #[test]
    fn parsed_title_is_plain_text() {
        let name = parsed("12 - hello world.flac").1;
        assert_eq!(name, "hello world");
        // Re-parsing the bare title must not strip anything from it.
        assert!(parse_filename(&name).is_err());
        assert_eq!(parsed("12 - hello world.flac").1, name);
    }

    #[test]
    fn non_ascii_digits_are_not_track_numbers() {
        assert!(parse_filename("١٢ - track.flac").is_err());
    }
}
