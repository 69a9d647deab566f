//! Workflow status aggregation.
//!
//! Status is computed entirely from the filesystem: which of the three
//! stage documents and the confirmation record exist in a feature
//! directory. The aggregator also derives the current stage and a coarse
//! progress figure from that existence information.

use crate::confirmations::{self, CONFIRMATIONS_FILE};
use crate::error::Result;
use crate::stage::Stage;
use crate::tools::fs::FsAdapter;
use serde::Serialize;
use std::path::Path;

/// Human-readable name of the confirmation record in existing-file lists.
const CONFIRMATIONS_DISPLAY_NAME: &str = "Workflow status";

/// Existence snapshot of the workflow artifacts in a feature directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkflowStatus {
    /// `requirements.md` exists.
    pub requirements: bool,

    /// `design.md` exists.
    pub design: bool,

    /// `tasks.md` exists.
    pub tasks: bool,

    /// `.workflow-confirmations.json` exists.
    pub confirmations: bool,
}

impl WorkflowStatus {
    /// Returns `true` if any workflow artifact exists.
    ///
    /// This is the "already initialized" predicate: a feature directory
    /// counts as initialized as soon as a single marker file is present.
    pub fn any_exists(&self) -> bool {
        self.requirements || self.design || self.tasks || self.confirmations
    }

    /// Returns whether the document for a stage exists.
    pub fn document_exists(&self, stage: Stage) -> bool {
        match stage {
            Stage::Requirements => self.requirements,
            Stage::Design => self.design,
            Stage::Tasks => self.tasks,
        }
    }

    /// Returns the human-readable names of the existing artifacts, in the
    /// fixed order: requirements, design, tasks, confirmation record.
    pub fn existing_files(&self) -> Vec<&'static str> {
        let mut files = Vec::new();
        for stage in Stage::ALL {
            if self.document_exists(stage) {
                files.push(stage.display_name());
            }
        }
        if self.confirmations {
            files.push(CONFIRMATIONS_DISPLAY_NAME);
        }
        files
    }
}

/// Coarse workflow progress derived from document existence.
///
/// Serializes with camelCase keys to match the response payload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowProgress {
    /// Number of stage documents that exist.
    pub completed_stages: u8,

    /// Total number of stages.
    pub total_stages: u8,

    /// Completion percentage (0..=100).
    pub percent: u8,
}

/// Probes a feature directory for the four fixed workflow artifacts.
pub fn workflow_status(fs: &dyn FsAdapter, feature_dir: &Path) -> WorkflowStatus {
    WorkflowStatus {
        requirements: fs.exists(&feature_dir.join(Stage::Requirements.document_file())),
        design: fs.exists(&feature_dir.join(Stage::Design.document_file())),
        tasks: fs.exists(&feature_dir.join(Stage::Tasks.document_file())),
        confirmations: fs.exists(&feature_dir.join(CONFIRMATIONS_FILE)),
    }
}

/// Determines the current stage of a feature.
///
/// The current stage is the first stage whose document is missing or whose
/// confirmation flag is not set. When every stage is complete the terminal
/// stage (`Tasks`) is reported.
///
/// # Errors
///
/// Returns an error if the confirmation record exists but is corrupted.
pub fn current_stage(
    fs: &dyn FsAdapter,
    feature_dir: &Path,
    status: &WorkflowStatus,
) -> Result<Stage> {
    let confirmed = confirmations::load_confirmations(fs, feature_dir)?;

    for stage in Stage::ALL {
        if !status.document_exists(stage) || !confirmed.get(stage) {
            return Ok(stage);
        }
    }

    Ok(Stage::Tasks)
}

/// Calculates workflow progress from the existence snapshot.
///
/// Each existing stage document contributes one completed stage; the
/// percentage is the completed share of the three stages.
pub fn workflow_progress(status: &WorkflowStatus) -> WorkflowProgress {
    let total = Stage::ALL.len() as u8;
    let completed = Stage::ALL
        .iter()
        .filter(|stage| status.document_exists(**stage))
        .count() as u8;

    WorkflowProgress {
        completed_stages: completed,
        total_stages: total,
        percent: (u32::from(completed) * 100 / u32::from(total)) as u8,
    }
}
