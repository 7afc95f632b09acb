//! CLI argument definitions using clap.
//!
//! ```text
//! i18n-sync <REFERENCE> <SOURCES>... [--auto-add] [--auto-remove]
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::core::SyncOptions;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Reference JSON file mapping translation keys to translated strings
    pub reference: PathBuf,

    /// Source files or directories to scan for translation calls
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,

    /// Insert keys used in source but missing from the reference file
    #[arg(long)]
    pub auto_add: bool,

    /// Delete keys from the reference file that are no longer used
    #[arg(long)]
    pub auto_remove: bool,

    /// Config file path (default: nearest .i18nsyncrc.json)
    #[arg(long, env = "I18N_SYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            auto_add: self.auto_add,
            auto_remove: self.auto_remove,
        }
    }
}
