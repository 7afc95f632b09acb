//! The synchronization pipeline.
//!
//! `load reference → collect sources → scan → diff → patch → persist`
//!
//! Each step runs to completion before the next one starts. The reference file
//! is only rewritten when at least one category of changes was applied.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    core::{
        diff::KeyDiff, extract::KeyExtractor, file_scanner::collect_source_files,
        reference::ReferenceMap,
    },
    error::SyncResult,
};

/// Which categories of changes to write back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    pub auto_add: bool,
    pub auto_remove: bool,
}

/// Outcome of one synchronization run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub reference_path: PathBuf,
    /// Number of source files scanned.
    pub source_files: usize,
    /// Number of entries in the reference file before patching.
    pub reference_entries: usize,
    pub diff: KeyDiff,
    pub added_applied: bool,
    pub removed_applied: bool,
    /// Placeholder entries inserted into the file.
    pub entries_added: usize,
    /// Entries deleted from the file, plural variants counted separately.
    pub entries_removed: usize,
}

impl SyncReport {
    /// No differences between source and reference.
    pub fn is_clean(&self) -> bool {
        self.diff.is_empty()
    }

    /// Added keys that were found but not written.
    pub fn pending_added(&self) -> bool {
        !self.diff.added.is_empty() && !self.added_applied
    }

    /// Removed keys that were found but not deleted.
    pub fn pending_removed(&self) -> bool {
        !self.diff.removed.is_empty() && !self.removed_applied
    }

    /// True when nothing is left for the user to do.
    pub fn is_resolved(&self) -> bool {
        !self.pending_added() && !self.pending_removed()
    }
}

pub struct Synchronizer<'a> {
    config: &'a Config,
    extractor: KeyExtractor,
}

impl<'a> Synchronizer<'a> {
    pub fn new(config: &'a Config) -> Result<Self, regex::Error> {
        Ok(Self {
            config,
            extractor: KeyExtractor::new(&config.markers)?,
        })
    }

    /// Scan every source file and collect the referenced keys.
    pub fn scan(&self, files: &[PathBuf]) -> SyncResult<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        for file in files {
            found.extend(self.extractor.extract_file(file)?);
        }
        Ok(found)
    }

    pub fn run(
        &self,
        reference_path: &Path,
        sources: &[PathBuf],
        options: SyncOptions,
    ) -> SyncResult<SyncReport> {
        let mut reference = ReferenceMap::open(reference_path)?;
        let reference_entries = reference.len();
        if reference.is_empty() {
            tracing::debug!(file = %reference.path().display(), "reference file has no entries");
        }

        let scan = collect_source_files(sources, &self.config.extensions, &self.config.ignores);
        let found = self.scan(&scan.files)?;

        let reference_keys: BTreeSet<String> = reference.keys().cloned().collect();
        let diff = KeyDiff::compute(&found, &reference_keys, &self.config.plural_suffixes);
        tracing::debug!(
            found = found.len(),
            reference = reference_keys.len(),
            added = diff.added.len(),
            removed = diff.removed.len(),
            "computed key diff"
        );

        let added_applied = options.auto_add && !diff.added.is_empty();
        let mut entries_added = 0;
        if added_applied {
            for key in &diff.added {
                if reference.add_placeholder(key) {
                    entries_added += 1;
                }
            }
        }

        let removed_applied = options.auto_remove && !diff.removed.is_empty();
        let mut entries_removed = 0;
        if removed_applied {
            for key in &diff.removed {
                entries_removed += reference.remove_key(key, &self.config.plural_suffixes);
            }
        }

        if added_applied || removed_applied {
            reference.save(self.config.indent)?;
        }

        Ok(SyncReport {
            reference_path: reference.path().to_path_buf(),
            source_files: scan.files.len(),
            reference_entries,
            diff,
            added_applied,
            removed_applied,
            entries_added,
            entries_removed,
        })
    }
}
