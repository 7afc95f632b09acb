//! Error types for the synchronizer pipeline.
//!
//! Reference-file load failures are reported to the user and turned into a
//! failing exit status. Every other variant is propagated to `main`.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to read reference file {}", .path.display())]
    ReferenceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse reference file {}", .path.display())]
    ReferenceParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Root of reference file must be a JSON object: {}", .path.display())]
    ReferenceNotObject { path: PathBuf },

    #[error("Failed to read source file {}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize reference file {}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write reference file {}", .path.display())]
    ReferenceWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SyncError {
    /// True for failures that happen while loading the reference mapping.
    pub fn is_reference_load(&self) -> bool {
        matches!(
            self,
            SyncError::ReferenceRead { .. }
                | SyncError::ReferenceParse { .. }
                | SyncError::ReferenceNotObject { .. }
        )
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
