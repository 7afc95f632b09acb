use std::env;

use anyhow::{Context, Result};

use super::args::Arguments;
use crate::{
    config::load_config,
    core::{SyncReport, Synchronizer},
};

/// Load configuration and run one synchronization pass.
///
/// # Returns
/// - `Ok(SyncReport)` describing the differences and what was applied
/// - `Err` if the config is invalid or any file operation fails; reference
///   load failures carry a [`crate::error::SyncError`] that can be downcast
pub fn run(args: &Arguments) -> Result<SyncReport> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(args.config.as_deref(), &cwd)?;
    match &loaded.path {
        Some(path) => tracing::debug!(config = %path.display(), "loaded config file"),
        None => tracing::debug!("no config file found, using defaults"),
    }

    let synchronizer =
        Synchronizer::new(&loaded.config).context("Failed to build translation call pattern")?;
    let report = synchronizer.run(&args.reference, &args.sources, args.sync_options())?;
    Ok(report)
}
