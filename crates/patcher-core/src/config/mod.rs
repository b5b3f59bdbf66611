//! Run options and fixed names.
//!
//! - `Options` - per-run switches passed into the reconciler
//! - `MANIFEST_FILE_NAME`, `BPM_BACKUP_KEY` - file and key names
//! - `BPM_TOLERANCE` - tempo comparison tolerance

/// File name of the song manifest inside each song folder.
pub const MANIFEST_FILE_NAME: &str = "info.json";

/// Manifest key that receives the tempo replaced by a patch.
pub const BPM_BACKUP_KEY: &str = "beatsaber-patcher_bpm_old";

/// Two tempos closer than this are considered equal.
pub const BPM_TOLERANCE: f64 = 1e-4;

/// Switches for a single reconciliation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Detect and log mismatches, never write manifests.
    pub dry_run: bool,
    /// Emit per-track diagnostic lines.
    pub verbose: bool,
}

impl Options {
    pub fn new(dry_run: bool, verbose: bool) -> Self {
        Self { dry_run, verbose }
    }
}
