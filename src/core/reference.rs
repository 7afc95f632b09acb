use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::{
    core::normalize::is_variant_of,
    error::{SyncError, SyncResult},
};

/// The on-disk translation mapping, key order preserved.
#[derive(Debug, Clone)]
pub struct ReferenceMap {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl ReferenceMap {
    /// Read and parse a reference file. The root must be a JSON object.
    pub fn open(path: &Path) -> SyncResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| SyncError::ReferenceRead {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| SyncError::ReferenceParse {
                path: path.to_path_buf(),
                source,
            })?;

        match value {
            Value::Object(data) => Ok(Self {
                file_path: path.to_path_buf(),
                data,
            }),
            _ => Err(SyncError::ReferenceNotObject {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    /// Append `key` with its own text as the value.
    ///
    /// An existing entry is never overwritten. Returns true if inserted.
    pub fn add_placeholder(&mut self, key: &str) -> bool {
        if self.data.contains_key(key) {
            return false;
        }
        self.data.insert(key.to_string(), Value::String(key.to_string()));
        true
    }

    /// Delete `base` and all of its plural variants. Returns the number of
    /// entries removed.
    pub fn remove_key<S: AsRef<str>>(&mut self, base: &str, plural_suffixes: &[S]) -> usize {
        let before = self.data.len();
        self.data.retain(|key, _| !is_variant_of(key, base, plural_suffixes));
        before - self.data.len()
    }

    /// Serialize with `indent` spaces per level and a trailing newline.
    pub fn to_json_string(&self, indent: usize) -> SyncResult<String> {
        let indent = " ".repeat(indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.data
            .serialize(&mut serializer)
            .map_err(|source| SyncError::Serialize {
                path: self.file_path.clone(),
                source,
            })?;

        // serde_json only emits valid UTF-8
        let mut content = String::from_utf8_lossy(&buf).into_owned();
        content.push('\n');
        Ok(content)
    }

    /// Overwrite the reference file in place.
    pub fn save(&self, indent: usize) -> SyncResult<()> {
        let content = self.to_json_string(indent)?;
        fs::write(&self.file_path, content).map_err(|source| SyncError::ReferenceWrite {
            path: self.file_path.clone(),
            source,
        })?;
        tracing::info!(
            file = %self.file_path.display(),
            entries = self.data.len(),
            "wrote reference file"
        );
        Ok(())
    }
}
