//! Translation key extraction from source text.
//!
//! Extraction is regex based and runs in two passes over the file contents:
//!
//! 1. Adjacent same-quote string literals joined with `+` are folded into one
//!    literal by deleting the `' + '` boundary (whitespace and line breaks
//!    around the `+` are allowed).
//! 2. Calls to one of the marker functions whose first argument is a quoted
//!    literal are matched. The literal must sit on the same line as the
//!    opening parenthesis and be followed by `,` or `)`.

use std::{
    borrow::Cow,
    collections::BTreeSet,
    fs,
    path::Path,
    sync::LazyLock,
};

use regex::Regex;

use crate::error::{SyncError, SyncResult};

// One alternative per quote character, the regex crate has no backreferences.
static CONCATENATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'\s*\+\s*'|"\s*\+\s*"|`\s*\+\s*`"#).unwrap());

/// Capture group holding the literal body for each quote style.
const QUOTE_GROUPS: [(usize, char); 3] = [(1, '\''), (2, '"'), (3, '`')];

/// Fold `"a" + "b"` style concatenations into `"ab"`.
///
/// Only the boundary between two literals using the same quote character is
/// removed, so `'a' + "b"` is left untouched.
pub fn fold_concatenations(source: &str) -> Cow<'_, str> {
    CONCATENATION_REGEX.replace_all(source, "")
}

/// Extracts translation keys from calls to a fixed set of marker functions.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    call_regex: Regex,
}

impl KeyExtractor {
    /// Build an extractor for the given marker function names (e.g. `_t`).
    pub fn new<S: AsRef<str>>(markers: &[S]) -> Result<Self, regex::Error> {
        let alternatives = markers
            .iter()
            .map(|m| regex::escape(m.as_ref()))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = format!(
            r#"(?:{alternatives})\([ \t]*(?:'((?:[^'\\\n]|\\.)*)'|"((?:[^"\\\n]|\\.)*)"|`((?:[^`\\\n]|\\.)*)`)[ \t]*[,)]"#
        );

        Ok(Self {
            call_regex: Regex::new(&pattern)?,
        })
    }

    /// Extract every key referenced in `source`.
    pub fn extract(&self, source: &str) -> BTreeSet<String> {
        let folded = fold_concatenations(source);
        let mut keys = BTreeSet::new();

        for captures in self.call_regex.captures_iter(&folded) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            // `foo_t(` is a different function
            if !starts_identifier(&folded, whole.start()) {
                continue;
            }

            for (group, quote) in QUOTE_GROUPS {
                if let Some(literal) = captures.get(group) {
                    keys.insert(unescape(literal.as_str(), quote));
                    break;
                }
            }
        }

        keys
    }

    /// Read a source file and extract its keys.
    pub fn extract_file(&self, path: &Path) -> SyncResult<BTreeSet<String>> {
        let content = fs::read_to_string(path).map_err(|source| SyncError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;

        let keys = self.extract(&content);
        tracing::debug!(file = %path.display(), keys = keys.len(), "scanned source file");
        Ok(keys)
    }
}

/// True if the identifier at `start` is not the tail of a longer identifier.
fn starts_identifier(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '$'))
}

fn unescape(literal: &str, quote: char) -> String {
    let unescaped = literal.replace("\\'", "'");
    if quote == '\'' {
        unescaped
    } else {
        unescaped.replace(&format!("\\{quote}"), &quote.to_string())
    }
}
