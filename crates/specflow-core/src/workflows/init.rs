//! Initialize workflow implementation.
//!
//! Sets up a feature directory for the document-driven workflow: creates
//! the base and feature directories, probes for pre-existing artifacts,
//! scaffolds the initial requirements document, and records all stages as
//! unconfirmed.

use crate::confirmations::update_stage_confirmation;
use crate::documents::create_requirements_document;
use crate::error::Result;
use crate::progress::{report_progress, ProgressReporter};
use crate::response::{ErrorContext, ErrorKind, ResponseBuilder, WorkflowResult};
use crate::stage::Stage;
use crate::status::{current_stage, workflow_progress, workflow_status};
use crate::tools::fs::FsAdapter;
use serde_json::json;
use specflow_doc::TemplateManager;
use std::path::{Path, PathBuf};

/// Error code reported when the feature directory already holds artifacts.
pub const PROJECT_ALREADY_EXISTS: &str = "PROJECT_ALREADY_EXISTS";

/// Input configuration for the init workflow.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Base directory under which the feature directory is created.
    pub path: PathBuf,

    /// Name of the feature; becomes the feature directory name.
    pub feature_name: String,

    /// User-supplied introduction for the requirements document.
    pub introduction: String,
}

/// Initializes the workflow for a feature.
///
/// This workflow:
/// 1. Resolves the feature directory as `path/feature_name`
/// 2. Creates the base and feature directories (idempotent, recursive)
/// 3. Probes for the four fixed workflow artifacts
/// 4. Reports `PROJECT_ALREADY_EXISTS` when any artifact is present,
///    including the existing artifact names, current stage, and progress
/// 5. Otherwise generates the requirements document and marks all three
///    stages unconfirmed
///
/// Progress is reported at 0, 50, and 100 out of 100 through the optional
/// reporter, each notification awaited before proceeding.
///
/// Errors never escape this function: any failure along the way (including
/// a failing progress reporter) is converted into an error result carrying
/// `Initialization failed: <error>` and the feature path.
#[tracing::instrument(skip(fs, templates, reporter), fields(feature_name = %options.feature_name))]
pub async fn init_workflow(
    options: &InitOptions,
    fs: &dyn FsAdapter,
    templates: &TemplateManager,
    reporter: Option<&dyn ProgressReporter>,
) -> WorkflowResult {
    let feature_dir = options.path.join(&options.feature_name);

    match run_init(options, &feature_dir, fs, templates, reporter).await {
        Ok(result) => result,
        Err(error) => {
            tracing::warn!(error = %error, "initialization failed");
            WorkflowResult {
                display_text: ResponseBuilder::build_error_response(
                    ErrorKind::InvalidPath,
                    &ErrorContext::new(&feature_dir).with_error(error.to_string()),
                ),
                data: json!({
                    "success": false,
                    "error": format!("Initialization failed: {error}"),
                    "path": feature_dir.display().to_string(),
                }),
            }
        }
    }
}

async fn run_init(
    options: &InitOptions,
    feature_dir: &Path,
    fs: &dyn FsAdapter,
    templates: &TemplateManager,
    reporter: Option<&dyn ProgressReporter>,
) -> Result<WorkflowResult> {
    report_progress(reporter, 0, 100, "Starting initialization...").await?;

    // Create base directory, then the feature directory under it
    if !fs.exists(&options.path) {
        fs.create_dir_all(&options.path)?;
    }
    if !fs.exists(feature_dir) {
        fs.create_dir_all(feature_dir)?;
    }

    report_progress(reporter, 50, 100, "Checking project status...").await?;

    let status = workflow_status(fs, feature_dir);
    if status.any_exists() {
        report_progress(reporter, 100, 100, "Found existing project").await?;

        let stage = current_stage(fs, feature_dir, &status)?;
        let progress = workflow_progress(&status);
        let existing_files = status.existing_files();

        return Ok(WorkflowResult {
            display_text: ResponseBuilder::build_error_response(
                ErrorKind::AlreadyInitialized,
                &ErrorContext::new(feature_dir)
                    .with_existing_files(existing_files.join(", ")),
            ),
            data: json!({
                "success": false,
                "error": PROJECT_ALREADY_EXISTS,
                "existingFiles": existing_files,
                "currentStage": stage.as_str(),
                "progress": progress,
            }),
        });
    }

    let outcome = create_requirements_document(
        fs,
        feature_dir,
        &options.feature_name,
        &options.introduction,
        templates,
    )?;

    if !outcome.generated {
        return Ok(WorkflowResult {
            display_text: ResponseBuilder::build_error_response(
                ErrorKind::InvalidPath,
                &ErrorContext::new(feature_dir),
            ),
            data: json!({
                "success": false,
                "error": "Failed to create requirements document",
                "details": outcome,
            }),
        });
    }

    // Fresh workflow: every stage starts unconfirmed
    for stage in Stage::ALL {
        update_stage_confirmation(fs, feature_dir, stage, false)?;
    }

    report_progress(reporter, 100, 100, "Initialization completed!").await?;

    tracing::info!(path = %feature_dir.display(), "workflow initialized");

    Ok(ResponseBuilder::build_init_response(
        feature_dir,
        &options.feature_name,
    ))
}
