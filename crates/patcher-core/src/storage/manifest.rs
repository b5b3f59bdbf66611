use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::{Error, Result};

/// Song manifest (`info.json`).
///
/// Only the keys the patcher touches are typed. Every other key is kept in
/// `extra` so a rewrite does not drop data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beats_per_minute: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_levels: Option<Vec<DifficultyLevel>>,

    /// Tempo replaced by the most recent patch
    #[serde(
        rename = "beatsaber-patcher_bpm_old",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_bpm: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// One entry of `difficultyLevels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyLevel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_path: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Manifest {
    /// Load a manifest. A missing file, malformed JSON and a wrongly-typed
    /// known key are all reported as `Error::ManifestParse`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| Error::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Overwrite the file at `path` with this manifest as compact JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string(self)?;
        fs::write(path, content).map_err(|source| Error::ManifestWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the tempo, keeping the current one under the backup key.
    ///
    /// Only the immediately prior tempo is kept; an older backup is lost.
    pub fn apply_patch(&mut self, bpm: f64) {
        self.previous_bpm = self.beats_per_minute;
        self.beats_per_minute = Some(bpm);
    }

    /// Difficulty entries, or an empty slice when the key is absent.
    pub fn levels(&self) -> &[DifficultyLevel] {
        self.difficulty_levels.as_deref().unwrap_or_default()
    }
}
