//! Response building for workflow operations.
//!
//! Every workflow operation produces a [`WorkflowResult`]: a human-readable
//! display text plus a structured JSON payload for programmatic consumers.
//! The payload keys are camelCase to stay compatible with existing JSON
//! clients of the workflow.

use crate::stage::Stage;
use crate::status::workflow_progress;
use crate::status::WorkflowStatus;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};

/// The output type of every workflow operation.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowResult {
    /// Human-readable summary of the outcome.
    pub display_text: String,

    /// Structured payload; shape varies by outcome.
    pub data: serde_json::Value,
}

impl WorkflowResult {
    /// Returns the `success` flag of the payload (`false` when absent).
    pub fn is_success(&self) -> bool {
        self.data
            .get("success")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}

/// Kinds of user-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The feature directory already contains workflow artifacts.
    AlreadyInitialized,

    /// The feature path could not be initialized.
    InvalidPath,
}

/// Context interpolated into error messages.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Feature directory the message refers to.
    pub path: PathBuf,

    /// Comma-separated list of existing artifact names, if any.
    pub existing_files: Option<String>,

    /// Underlying error description, if any.
    pub error: Option<String>,
}

impl ErrorContext {
    /// Creates a context for a feature directory.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Sets the existing-artifact list for this context.
    #[must_use]
    pub fn with_existing_files(mut self, existing_files: impl Into<String>) -> Self {
        self.existing_files = Some(existing_files.into());
        self
    }

    /// Sets the underlying error description for this context.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Builder for the display texts and payloads of workflow responses.
pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Builds the display text for an error outcome.
    pub fn build_error_response(kind: ErrorKind, ctx: &ErrorContext) -> String {
        match kind {
            ErrorKind::AlreadyInitialized => {
                let mut text = format!(
                    "A workflow already exists at {}.",
                    ctx.path.display()
                );
                if let Some(existing) = &ctx.existing_files {
                    text.push_str(&format!("\nExisting artifacts: {existing}."));
                }
                text.push_str(
                    "\nChoose a different feature name or continue with the existing documents.",
                );
                text
            }
            ErrorKind::InvalidPath => {
                let mut text = format!(
                    "Failed to initialize workflow at {}.",
                    ctx.path.display()
                );
                if let Some(error) = &ctx.error {
                    text.push_str(&format!("\nCause: {error}"));
                }
                text
            }
        }
    }

    /// Builds the success result for a completed initialization.
    pub fn build_init_response(feature_dir: &Path, feature_name: &str) -> WorkflowResult {
        let status = WorkflowStatus {
            requirements: true,
            ..Default::default()
        };
        let progress = workflow_progress(&status);

        let display_text = format!(
            "Workflow initialized for \"{feature_name}\".\n\
             Requirements document created at {}.\n\
             Review the requirements and confirm them to move on to the design stage.",
            feature_dir.join(Stage::Requirements.document_file()).display()
        );

        WorkflowResult {
            display_text,
            data: json!({
                "success": true,
                "featureName": feature_name,
                "path": feature_dir.display().to_string(),
                "currentStage": Stage::Requirements.as_str(),
                "progress": progress,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_initialized_message_lists_artifacts() {
        let ctx = ErrorContext::new("/specs/feat")
            .with_existing_files("Requirements document, Design document");

        let text = ResponseBuilder::build_error_response(ErrorKind::AlreadyInitialized, &ctx);
        assert!(text.contains("/specs/feat"));
        assert!(text.contains("Requirements document, Design document"));
    }

    #[test]
    fn test_invalid_path_message_includes_cause() {
        let ctx = ErrorContext::new("/specs/feat").with_error("disk full");

        let text = ResponseBuilder::build_error_response(ErrorKind::InvalidPath, &ctx);
        assert!(text.contains("/specs/feat"));
        assert!(text.contains("disk full"));
    }

    #[test]
    fn test_init_response_is_successful() {
        let result = ResponseBuilder::build_init_response(Path::new("/specs/feat"), "feat");

        assert!(result.is_success());
        assert_eq!(result.data["featureName"], "feat");
        assert_eq!(result.data["currentStage"], "requirements");
        assert_eq!(result.data["progress"]["completedStages"], 1);
        assert!(result.display_text.contains("requirements.md"));
    }

    #[test]
    fn test_is_success_defaults_to_false() {
        let result = WorkflowResult {
            display_text: String::new(),
            data: json!({}),
        };
        assert!(!result.is_success());
    }
}
