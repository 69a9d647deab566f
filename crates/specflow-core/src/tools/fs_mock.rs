//! Mock file system adapter for testing.
//!
//! This module provides a mock implementation of the `FsAdapter` trait
//! for use in tests. The mock uses an in-memory HashMap to simulate
//! file system operations.

use crate::error::{Result, WorkflowError};
use crate::tools::fs::FsAdapter;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock file system adapter for testing.
///
/// Uses an in-memory HashMap to simulate file system operations.
/// All operations are thread-safe via Arc<Mutex>.
///
/// # Examples
///
/// ```
/// use specflow_core::tools::fs_mock::MockFsAdapter;
/// use specflow_core::tools::fs::FsAdapter;
/// use std::path::Path;
///
/// let fs = MockFsAdapter::new();
/// fs.write(Path::new("/test.txt"), "content").unwrap();
/// assert_eq!(fs.read_to_string(Path::new("/test.txt")).unwrap(), "content");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFsAdapter {
    /// In-memory file storage (path -> content)
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    /// In-memory directory storage
    dirs: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockFsAdapter {
    /// Creates a new mock file system adapter with an empty file system.
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            dirs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pre-populates the mock file system with files.
    pub fn with_files(files: HashMap<PathBuf, String>) -> Self {
        Self {
            files: Arc::new(Mutex::new(files)),
            dirs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a copy of all files in the mock file system.
    pub fn get_all_files(&self) -> HashMap<PathBuf, String> {
        self.files.lock().unwrap().clone()
    }

    /// Returns all directory paths in the mock file system.
    pub fn get_all_dirs(&self) -> Vec<PathBuf> {
        self.dirs.lock().unwrap().clone()
    }
}

impl FsAdapter for MockFsAdapter {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| WorkflowError::PathNotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        // Auto-create parent directories
        if let Some(parent) = path.parent() {
            let mut dirs = self.dirs.lock().unwrap();
            if !dirs.contains(&parent.to_path_buf()) {
                dirs.push(parent.to_path_buf());
            }
        }

        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().contains(&path.to_path_buf())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut dirs = self.dirs.lock().unwrap();

        // Collect all parent directories
        let mut current = path.to_path_buf();
        let mut parents_to_add = Vec::new();

        while let Some(parent) = current.parent() {
            if parent.as_os_str().is_empty() || parent == Path::new("/") {
                break;
            }
            parents_to_add.push(parent.to_path_buf());
            current = parent.to_path_buf();
        }

        // Add in reverse order (root to leaf)
        for parent in parents_to_add.into_iter().rev() {
            if !dirs.contains(&parent) {
                dirs.push(parent);
            }
        }

        if !dirs.contains(&path.to_path_buf()) {
            dirs.push(path.to_path_buf());
        }

        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(&path.to_path_buf())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
