mod cli;
mod cli_utils;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use patcher_core::{Options, Reconciler};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides; --verbose lowers the default to debug
    let level = if args.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("beatsaber_patcher={level},patcher_core={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .init();

    let songs_dir = cli_utils::resolve_songs_dir(args.songs_dir.as_deref())?;
    info!("using beatsaber CustomSongs at {}", songs_dir.display());

    let reconciler = Reconciler::new(Options::new(args.dry_run, args.verbose));
    reconciler.process(&songs_dir)?;

    Ok(())
}
