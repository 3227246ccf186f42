use thiserror::Error;

use crate::core::descriptor::NodePath;

/// Central error type for every patch operation and both drivers.
/// Every module returns `Result<T, PatchError>`; none of them is recoverable.
#[derive(Debug, Error)]
pub enum PatchError {
    // ── Structure ───────────────────────────────────────
    #[error("{path}: missing required field `{field}`")]
    MissingField { path: NodePath, field: &'static str },

    #[error("{path}: expected {expected}")]
    UnexpectedType {
        path: NodePath,
        expected: &'static str,
    },

    // ── Identifiers ─────────────────────────────────────
    #[error("Invalid library name: {0}")]
    InvalidLibraryName(String),

    // ── Requests ────────────────────────────────────────
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No URL prefix specified")]
    MissingUrlPrefix,

    #[error("requires: no entry with uid {uid}")]
    MissingDependency { uid: String },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error on {stream}: {source}")]
    Io {
        stream: &'static str,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type PatchResult<T> = Result<T, PatchError>;

impl PatchError {
    pub(crate) fn missing(path: &NodePath, field: &'static str) -> Self {
        PatchError::MissingField {
            path: path.clone(),
            field,
        }
    }

    pub(crate) fn unexpected(path: &NodePath, expected: &'static str) -> Self {
        PatchError::UnexpectedType {
            path: path.clone(),
            expected,
        }
    }
}
