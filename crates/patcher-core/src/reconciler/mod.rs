//! Song folder reconciliation.
//!
//! Walks the immediate children of a songs directory and, for each song
//! folder, compares the manifest tempo against every track file it lists.
//! When any track disagrees, the manifest is rewritten with the tempo of the
//! hardest available difficulty (see `PATCH_PRIORITY`).

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::chart::{Difficulty, TrackTempos, close_enough};
use crate::config::{MANIFEST_FILE_NAME, Options};
use crate::error::{Error, Result};
use crate::storage::{DifficultyLevel, Manifest, TrackDocument};

/// What happened to a single song folder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SongOutcome {
    /// Every readable track agrees with the manifest.
    InSync,
    /// At least one track disagrees. `written` is false on a dry run.
    Mismatch { patch_bpm: f64, written: bool },
}

pub struct Reconciler {
    options: Options,
}

impl Reconciler {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Reconcile every song folder directly under `songs_dir`.
    ///
    /// Fails only when the directory itself cannot be used. Problems inside
    /// a song folder are logged and the walk moves on.
    pub fn process<P: AsRef<Path>>(&self, songs_dir: P) -> Result<()> {
        let songs_dir = songs_dir.as_ref();

        let metadata = fs::metadata(songs_dir).map_err(|source| Error::RootNotFound {
            path: songs_dir.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory(songs_dir.to_path_buf()));
        }

        let entries = WalkDir::new(songs_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in entries {
            let entry = entry.map_err(|source| Error::ListDir {
                path: songs_dir.to_path_buf(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy();

            if !entry.file_type().is_dir() {
                if self.options.verbose {
                    debug!("not a directory, skipping: {}", name);
                }
                continue;
            }
            if name.starts_with('.') {
                if self.options.verbose {
                    debug!("is a dotfile, skipping: {}", name);
                }
                continue;
            }

            if let Err(e) = self.reconcile_song(entry.path()) {
                report_song_error(&name, &e);
            }
        }

        Ok(())
    }

    /// Reconcile a single song folder.
    ///
    /// Returns an error when the folder has to be skipped as a whole
    /// (unreadable manifest, manifest without a tempo) or when the patched
    /// manifest cannot be written. Broken track entries are logged and
    /// skipped.
    pub fn reconcile_song(&self, song_dir: &Path) -> Result<SongOutcome> {
        let song = song_name(song_dir);
        let manifest_path = song_dir.join(MANIFEST_FILE_NAME);

        let mut manifest = Manifest::load(&manifest_path)?;
        let manifest_bpm = manifest
            .beats_per_minute
            .ok_or_else(|| Error::MissingTempo(manifest_path.clone()))?;

        if manifest.difficulty_levels.is_none() {
            warn!("no difficulty levels in manifest for: {}", song);
        }
        if self.options.verbose {
            debug!("{}: manifest bpm={:.1}", song, manifest_bpm);
        }

        let mut tempos = TrackTempos::new();
        let mut has_mismatch = false;

        for (index, level) in manifest.levels().iter().enumerate() {
            let Some((label, bpm)) = self.read_track(song_dir, &song, index, level) else {
                continue;
            };

            match Difficulty::from_label(label) {
                Some(difficulty) => tempos.record(difficulty, bpm),
                None => {
                    if self.options.verbose {
                        debug!(
                            "{}: unrecognised difficulty {}, not used for patching",
                            song, label
                        );
                    }
                }
            }

            let matches_manifest = close_enough(bpm, manifest_bpm);
            if self.options.verbose {
                debug!(
                    "{}: {} bpm={:.1} (match={})",
                    song, label, bpm, matches_manifest
                );
            }
            if !matches_manifest {
                info!(
                    "{}: mismatched BPM: {} ({:.1}) and manifest ({:.1})",
                    song, label, bpm, manifest_bpm
                );
                has_mismatch = true;
            }
        }

        if !has_mismatch {
            return Ok(SongOutcome::InSync);
        }

        let patch_bpm = tempos.patch_bpm();
        if self.options.dry_run {
            if self.options.verbose {
                debug!("{}: dry run, would patch to {:.1} bpm", song, patch_bpm);
            }
            return Ok(SongOutcome::Mismatch {
                patch_bpm,
                written: false,
            });
        }

        manifest.apply_patch(patch_bpm);
        manifest.save(&manifest_path)?;
        info!("{}: patched {} to {:.1} bpm", song, MANIFEST_FILE_NAME, patch_bpm);

        Ok(SongOutcome::Mismatch {
            patch_bpm,
            written: true,
        })
    }

    /// Label and tempo of one difficulty entry, or `None` after logging why
    /// the entry was skipped.
    fn read_track<'a>(
        &self,
        song_dir: &Path,
        song: &str,
        index: usize,
        level: &'a DifficultyLevel,
    ) -> Option<(&'a str, f64)> {
        let (Some(label), Some(track_path)) = (&level.difficulty, &level.json_path) else {
            warn!(
                "{}: difficulty entry {} is missing difficulty or jsonPath, skipping",
                song, index
            );
            return None;
        };

        let path = track_file_path(song_dir, track_path);
        let bpm = TrackDocument::load(&path).and_then(|track| track.bpm(&path));
        match bpm {
            Ok(bpm) => Some((label.as_str(), bpm)),
            Err(Error::MissingTrackTempo(_)) => {
                warn!("no _beatsPerMinute in track file: {}/{}", song, track_path);
                None
            }
            Err(e) => {
                warn!("couldn't parse track file: {}/{}", song, track_path);
                debug!("{}", e);
                None
            }
        }
    }
}

/// Resolve a manifest `jsonPath` inside the song folder. Root and drive
/// prefixes are dropped so an absolute-looking path cannot leave the folder.
fn track_file_path(song_dir: &Path, track_path: &str) -> PathBuf {
    let relative: PathBuf = Path::new(track_path)
        .components()
        .filter(|c| {
            matches!(
                c,
                Component::Normal(_) | Component::CurDir | Component::ParentDir
            )
        })
        .collect();
    song_dir.join(relative)
}

fn song_name(song_dir: &Path) -> String {
    song_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| song_dir.display().to_string())
}

fn report_song_error(song: &str, err: &Error) {
    match err {
        Error::ManifestParse { .. } => {
            warn!("couldn't parse manifest for: {}", song);
            debug!("{}", err);
        }
        Error::MissingTempo(_) => warn!("no beatsPerMinute in manifest for: {}", song),
        _ => warn!("{}: {}", song, err),
    }
}
