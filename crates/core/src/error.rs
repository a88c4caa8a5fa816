//! Typed errors for icon materialization.
//!
//! Every failure is fatal to the run; callers only need to tell a bad
//! payload apart from a filesystem problem.

use crate::models::IconRole;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterializeError {
    /// The base64 envelope of an embedded payload is malformed.
    #[error("Failed to decode {role} icon payload: {source}")]
    Decode {
        role: IconRole,
        #[source]
        source: base64::DecodeError,
    },

    /// Directory creation or file write failed.
    #[error("Failed to {op} '{}': {source}", .path.display())]
    Io {
        /// Short verb phrase naming the failing step, e.g. "create directory".
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MaterializeError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
