//! Reconcile the tempo stored in Beat Saber song manifests with the tempo
//! recorded in their difficulty track files.

pub mod chart;
pub mod config;
pub mod error;
pub mod reconciler;
pub mod storage;

pub use chart::{Difficulty, PATCH_PRIORITY, TrackTempos, close_enough};
pub use config::Options;
pub use error::{Error, Result};
pub use reconciler::{Reconciler, SongOutcome};
pub use storage::{DifficultyLevel, Manifest, TrackDocument};
