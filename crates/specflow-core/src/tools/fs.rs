//! File system adapter trait.
//!
//! This module defines the `FsAdapter` trait for the file system operations
//! the workflow needs, allowing for both real file system access and mock
//! implementations for testing.

use crate::error::Result;
use std::path::Path;

/// File system adapter trait.
///
/// Defines the interface for the file system operations used by the
/// workflow: existence probing, recursive directory creation, and document
/// reads and writes. Implementations can be real (using `std::fs`) or
/// mocked for testing.
pub trait FsAdapter: Send + Sync {
    /// Reads the contents of a file as a string.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::PathNotFound` if the file doesn't exist,
    /// `WorkflowError::FileReadError` if reading fails.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes a string to a file, creating it if it doesn't exist and
    /// creating missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::FileWriteError` if writing fails,
    /// `WorkflowError::PermissionDenied` if lacking write permissions.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Checks if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Creates a directory and all missing parent directories. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::FileWriteError` if creation fails,
    /// `WorkflowError::PermissionDenied` if lacking write permissions.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Checks if a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Checks if a path exists and is a file.
    fn is_file(&self, path: &Path) -> bool;
}
