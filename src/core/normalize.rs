//! Plural-suffix normalization of reference keys.

use std::collections::BTreeSet;

/// Strip one trailing plural suffix (e.g. `|one`) from `key`.
pub fn normalize_key<'a, S: AsRef<str>>(key: &'a str, plural_suffixes: &[S]) -> &'a str {
    plural_suffixes
        .iter()
        .find_map(|suffix| key.strip_suffix(suffix.as_ref()))
        .unwrap_or(key)
}

/// Map every reference key to its base key.
pub fn normalize_keys<'a, I, S>(keys: I, plural_suffixes: &[S]) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
    S: AsRef<str>,
{
    keys.into_iter()
        .map(|key| normalize_key(key, plural_suffixes).to_string())
        .collect()
}

/// True if `key` is `base` itself or `base` followed by one plural suffix.
pub fn is_variant_of<S: AsRef<str>>(key: &str, base: &str, plural_suffixes: &[S]) -> bool {
    key == base
        || plural_suffixes
            .iter()
            .any(|suffix| key.strip_suffix(suffix.as_ref()) == Some(base))
}
