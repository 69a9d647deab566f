//! Configuration types for the Specflow runtime.
//!
//! This module defines the runtime configuration: where feature directories
//! live, where the optional configuration file sits, and which directories
//! may override the built-in document templates.

use crate::error::{Result, WorkflowError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file at the project root.
pub const CONFIG_FILE: &str = ".specflow.toml";

/// Main Specflow configuration.
///
/// Contains all paths needed by the runtime. This structure is typically
/// derived from a project root, with an optional `.specflow.toml` overriding
/// the defaults.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Base directory under which feature directories are created.
    pub doc_root: PathBuf,

    /// Path to the optional configuration file.
    pub config_file: PathBuf,

    /// Document template directories (for user overrides). The first
    /// existing directory wins; the built-in templates are the fallback.
    pub template_dirs: Vec<PathBuf>,
}

/// On-disk shape of `.specflow.toml`. All fields are optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFileContents {
    /// Feature directory root, relative to the project root.
    doc_root: Option<PathBuf>,

    /// Directory of `.j2` document templates, relative to the project root.
    template_dir: Option<PathBuf>,
}

impl WorkflowConfig {
    /// Creates a new configuration with sensible defaults.
    ///
    /// # Arguments
    ///
    /// * `root` - The project root directory.
    ///
    /// # Returns
    ///
    /// A new `WorkflowConfig` with the feature directory root under
    /// `<root>/.specflow/specs` and no template overrides.
    pub fn new(root: PathBuf) -> Self {
        Self {
            doc_root: root.join(".specflow").join("specs"),
            config_file: root.join(CONFIG_FILE),
            template_dirs: Vec::new(),
        }
    }

    /// Loads configuration from `<root>/.specflow.toml` when present,
    /// falling back to defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::ConfigParseError` if the file exists but is
    /// not valid TOML, or an IO error if it cannot be read.
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Self::new(root.to_path_buf());

        if !config.config_file.exists() {
            return Ok(config);
        }

        let raw = std::fs::read_to_string(&config.config_file)
            .map_err(|e| WorkflowError::FileReadError(format!("{CONFIG_FILE}: {e}")))?;
        let contents: ConfigFileContents = toml::from_str(&raw)
            .map_err(|e| WorkflowError::ConfigParseError(format!("{CONFIG_FILE}: {e}")))?;

        if let Some(doc_root) = contents.doc_root {
            config.doc_root = root.join(doc_root);
        }
        if let Some(template_dir) = contents.template_dir {
            config.template_dirs.push(root.join(template_dir));
        }

        Ok(config)
    }
}
