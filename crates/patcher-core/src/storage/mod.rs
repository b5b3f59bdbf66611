//! JSON documents read from song folders.

mod manifest;
mod track;

pub use manifest::{DifficultyLevel, Manifest};
pub use track::TrackDocument;
