//! Error types shared across the library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by manifest loading and generation preconditions.
///
/// The pipeline itself never fails for a well-formed class model; every
/// malformed or partial member degrades to "omit the member" instead.
#[derive(Debug, Error)]
pub enum AutoInterfaceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("duplicate artifact name '{0}'; class names must produce unique artifacts")]
    DuplicateArtifact(String),

    #[error("unknown class '{0}' in manifest")]
    UnknownClass(String),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Convenience result alias
pub type Result<T> = std::result::Result<T, AutoInterfaceError>;
