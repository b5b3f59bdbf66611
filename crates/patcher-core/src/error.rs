use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't open songs directory {path:?}: {source}")]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("given path is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("couldn't read contents of songs directory {path:?}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("couldn't parse manifest {path:?}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("no beatsPerMinute in manifest {0:?}")]
    MissingTempo(PathBuf),

    #[error("couldn't parse track file {path:?}: {message}")]
    TrackParse { path: PathBuf, message: String },

    #[error("no _beatsPerMinute in track file {0:?}")]
    MissingTrackTempo(PathBuf),

    #[error("couldn't write manifest {path:?}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
