use std::collections::BTreeSet;

use crate::core::normalize::normalize_keys;

/// Difference between the keys found in source and the reference keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// Referenced in source but missing from the reference file.
    pub added: BTreeSet<String>,
    /// Base keys present in the reference file but no longer referenced.
    pub removed: BTreeSet<String>,
}

impl KeyDiff {
    /// Compare source keys against the raw reference keys.
    ///
    /// Reference keys are compared by base key. A source key that is itself
    /// spelled with a plural suffix (`_t('n|one')`) matches its literal entry
    /// and keeps the base key in use.
    pub fn compute<S: AsRef<str>>(
        found: &BTreeSet<String>,
        reference_keys: &BTreeSet<String>,
        plural_suffixes: &[S],
    ) -> Self {
        let normalized = normalize_keys(reference_keys, plural_suffixes);
        let found_bases = normalize_keys(found, plural_suffixes);

        Self {
            added: found
                .iter()
                .filter(|key| !normalized.contains(*key) && !reference_keys.contains(*key))
                .cloned()
                .collect(),
            removed: normalized.difference(&found_bases).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
