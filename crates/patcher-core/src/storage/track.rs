use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Per-difficulty track file. Only the tempo is read; the note data is
/// skipped and the file is never written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrackDocument {
    #[serde(rename = "_beatsPerMinute", default)]
    pub beats_per_minute: Option<f64>,
}

impl TrackDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let parse_error = |message: String| Error::TrackParse {
            path: path.to_path_buf(),
            message,
        };
        let file = File::open(path).map_err(|e| parse_error(e.to_string()))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| parse_error(e.to_string()))
    }

    /// The track tempo, or `Error::MissingTrackTempo` naming `path`.
    pub fn bpm(&self, path: &Path) -> Result<f64> {
        self.beats_per_minute
            .ok_or_else(|| Error::MissingTrackTempo(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_track_tempo() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Expert.json");
        fs::write(
            &path,
            r#"{"_version": "1.5.0", "_beatsPerMinute": 128, "_notes": [{"_time": 1.0}]}"#,
        )
        .unwrap();

        let track = TrackDocument::load(&path).unwrap();
        assert_eq!(track.bpm(&path).unwrap(), 128.0);
    }

    #[test]
    fn test_track_without_tempo() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Hard.json");
        fs::write(&path, r#"{"_notes": []}"#).unwrap();

        let track = TrackDocument::load(&path).unwrap();
        assert!(matches!(track.bpm(&path), Err(Error::MissingTrackTempo(_))));
    }

    #[test]
    fn test_load_malformed_track() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Easy.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            TrackDocument::load(&path),
            Err(Error::TrackParse { .. })
        ));
    }

    #[test]
    fn test_load_missing_track() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            TrackDocument::load(temp.path().join("Normal.json")),
            Err(Error::TrackParse { .. })
        ));
    }
}
