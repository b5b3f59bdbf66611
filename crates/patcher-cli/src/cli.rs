//! CLI argument definitions for beatsaber-patcher.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "beatsaber-patcher")]
#[command(about = "Patch Beat Saber maps with correct BPM information", version)]
#[command(long_about = "Patch Beat Saber maps with correct BPM information.

Beat Saber reads a song's BPM from its manifest (info.json) and ignores the
BPM stored in the difficulty files (Expert.json, etc). This copies the BPM of
the hardest difficulty back into the manifest of every custom song whose
tempos disagree, keeping the old value under beatsaber-patcher_bpm_old.")]
pub struct Args {
    /// Custom songs directory (default: directory containing this executable)
    #[arg(value_name = "SONGS_DIR")]
    pub songs_dir: Option<PathBuf>,

    /// Don't write any changes to custom songs
    #[arg(short, long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
