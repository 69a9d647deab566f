//! Runtime for Specflow workflows.
//!
//! This module provides the `WorkflowRuntime` struct which wires together
//! the configuration, tool registry, and template manager, and exposes the
//! workflow operations as methods.

use crate::config::WorkflowConfig;
use crate::error::Result;
use crate::progress::ProgressReporter;
use crate::response::WorkflowResult;
use crate::status::{current_stage, workflow_progress, workflow_status, WorkflowProgress};
use crate::tools::fs_impl::StdFsAdapter;
use crate::tools::ToolRegistry;
use crate::workflows::{self, InitOptions};
use crate::stage::Stage;
use specflow_doc::TemplateManager;

/// Runtime for Specflow workflows.
///
/// The runtime is the main entry point for executing workflows. It owns the
/// configuration, the tool registry, and the resolved template manager.
///
/// # Examples
///
/// ```no_run
/// use specflow_core::{WorkflowConfig, WorkflowRuntime};
/// use std::path::PathBuf;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WorkflowConfig::new(PathBuf::from("/path/to/project"));
/// let runtime = WorkflowRuntime::new(config)?;
///
/// let result = runtime.init_feature("my-feature", "", None).await;
/// println!("{}", result.display_text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WorkflowRuntime {
    /// Runtime configuration.
    pub config: WorkflowConfig,

    /// Tool registry for file system operations.
    pub tools: ToolRegistry,

    /// Template manager for document rendering.
    templates: TemplateManager,
}

impl WorkflowRuntime {
    /// Creates a new runtime with the given configuration.
    ///
    /// Templates are resolved from the first existing directory in
    /// `config.template_dirs`; the built-in templates are used when no
    /// override directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if template loading fails.
    pub fn new(config: WorkflowConfig) -> Result<Self> {
        let tools = ToolRegistry::new(Box::new(StdFsAdapter::new()));
        let templates = Self::init_templates(&config)?;

        Ok(Self {
            config,
            tools,
            templates,
        })
    }

    /// Resolves the template manager for a configuration.
    ///
    /// User-specified directories take precedence; a directory that exists
    /// but fails to load is skipped in favor of the next candidate.
    fn init_templates(config: &WorkflowConfig) -> Result<TemplateManager> {
        for dir in &config.template_dirs {
            if dir.exists() {
                match TemplateManager::from_dir(dir) {
                    Ok(templates) => return Ok(templates),
                    Err(error) => {
                        tracing::warn!(
                            dir = %dir.display(),
                            error = %error,
                            "skipping unloadable template directory"
                        );
                    }
                }
            }
        }

        TemplateManager::builtin().map_err(Into::into)
    }

    /// Initializes the workflow for a feature under the configured document
    /// root.
    ///
    /// Never fails: all errors are folded into the returned result.
    pub async fn init_feature(
        &self,
        feature_name: &str,
        introduction: &str,
        reporter: Option<&dyn ProgressReporter>,
    ) -> WorkflowResult {
        let options = InitOptions {
            path: self.config.doc_root.clone(),
            feature_name: feature_name.to_string(),
            introduction: introduction.to_string(),
        };

        workflows::init_workflow(&options, &*self.tools.fs, &self.templates, reporter).await
    }

    /// Reports the current stage and progress of a feature.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation record is corrupted.
    pub fn feature_status(&self, feature_name: &str) -> Result<(Stage, WorkflowProgress)> {
        let feature_dir = self.config.doc_root.join(feature_name);
        let status = workflow_status(&*self.tools.fs, &feature_dir);
        let stage = current_stage(&*self.tools.fs, &feature_dir, &status)?;

        Ok((stage, workflow_progress(&status)))
    }
}
