//! Tool adapters and registry for Specflow workflows.
//!
//! This module provides the tool registry that holds the file system
//! adapter used during workflow execution. The adapter is a trait object to
//! allow for different implementations (e.g., real vs. mock).

pub mod fs;
pub mod fs_impl;
pub mod fs_mock;

/// Tool registry that manages the available adapters.
///
/// The registry owns the file system adapter instance and provides access
/// to it during workflow execution.
pub struct ToolRegistry {
    /// File system adapter for probing, directory creation, and writes.
    pub fs: Box<dyn fs::FsAdapter>,
}

impl ToolRegistry {
    /// Creates a new tool registry with the provided file system adapter.
    pub fn new(fs: Box<dyn fs::FsAdapter>) -> Self {
        Self { fs }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("fs", &"Box<dyn FsAdapter>")
            .finish()
    }
}
