//! Standard file system adapter implementation.
//!
//! This module provides a concrete implementation of the `FsAdapter` trait
//! using `std::fs` for real file system operations.

use crate::error::{Result, WorkflowError};
use crate::tools::fs::FsAdapter;
use std::path::Path;

/// Standard file system adapter using `std::fs`.
///
/// This adapter provides real file system access and is the default
/// implementation used in production. For testing, use
/// [`MockFsAdapter`](crate::tools::fs_mock::MockFsAdapter) instead.
#[derive(Debug, Default)]
pub struct StdFsAdapter;

impl StdFsAdapter {
    /// Creates a new standard file system adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FsAdapter for StdFsAdapter {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WorkflowError::PathNotFound(path.to_path_buf())
            } else {
                WorkflowError::FileReadError(format!("{}: {}", path.display(), e))
            }
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            self.create_dir_all(parent)?;
        }

        std::fs::write(path, content).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                WorkflowError::PermissionDenied(path.display().to_string())
            } else {
                WorkflowError::FileWriteError(format!("{}: {}", path.display(), e))
            }
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                WorkflowError::PermissionDenied(path.display().to_string())
            } else {
                WorkflowError::FileWriteError(format!("{}: {}", path.display(), e))
            }
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
