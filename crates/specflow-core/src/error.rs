//! Error types for Specflow operations.
//!
//! This module defines all error variants that can occur during workflow
//! operations. All errors use `thiserror` for ergonomic error handling with
//! context. Note that the init workflow itself never surfaces these to the
//! caller directly; it converts them into structured [`WorkflowResult`]
//! payloads at its boundary.
//!
//! [`WorkflowResult`]: crate::response::WorkflowResult

use std::path::PathBuf;
use thiserror::Error;

/// Error types for Specflow operations.
///
/// Each variant represents a specific failure mode with relevant context,
/// enabling precise error handling and user-friendly error messages.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum WorkflowError {
    // File system errors
    /// Path not found in the file system.
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    /// Invalid path provided.
    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    /// Error reading file.
    #[error("file read error: {0}")]
    FileReadError(String),

    /// Error writing file.
    #[error("file write error: {0}")]
    FileWriteError(String),

    /// Permission denied for the specified operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    // Workflow state errors
    /// Confirmation record exists but cannot be parsed.
    #[error("corrupted confirmation file: {0}")]
    CorruptedConfirmations(PathBuf),

    /// Unknown stage name encountered.
    #[error("invalid stage: {0}")]
    InvalidStage(String),

    // Config errors
    /// Error parsing configuration file.
    #[error("config parse error: {0}")]
    ConfigParseError(String),

    // Template errors from the document crate
    /// Document template loading or rendering failed.
    #[error(transparent)]
    Template(#[from] specflow_doc::TemplateError),

    // IO and system errors
    /// JSON serialization or deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // Anyhow passthrough for rich context
    /// Generic error with context from anyhow.
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for Specflow operations.
///
/// All fallible operations return this type, using [`WorkflowError`] for
/// error variants.
pub type Result<T> = std::result::Result<T, WorkflowError>;
