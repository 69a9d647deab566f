//! Error types for the document template crate.

use std::path::PathBuf;

/// Errors that can occur while loading or rendering document templates.
#[derive(thiserror::Error, Debug)]
pub enum TemplateError {
    /// Template was not found among the loaded templates.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Error occurred while rendering a template.
    #[error("template render error: {0}")]
    TemplateRenderError(String),

    /// Template source could not be parsed.
    #[error("template parse error: {0}")]
    TemplateParseError(String),

    /// Failed to read a template file from the filesystem.
    #[error("template load error: {path}")]
    TemplateLoadError {
        /// Path to the template that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Template directory does not exist or is not accessible.
    #[error("template directory not found: {0}")]
    TemplateDirectoryNotFound(PathBuf),

    /// Template directory listing failed.
    #[error("failed to list templates in {path}")]
    TemplateListError {
        /// Path to the template directory.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for document template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
