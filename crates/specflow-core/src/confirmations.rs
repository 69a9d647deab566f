//! Per-stage confirmation tracking.
//!
//! Each feature directory carries a `.workflow-confirmations.json` record
//! with one boolean per stage, indicating user sign-off. The record is
//! created on first update and rewritten in full on every change.

use crate::error::{Result, WorkflowError};
use crate::stage::Stage;
use crate::tools::fs::FsAdapter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fixed file name of the confirmation record inside a feature directory.
///
/// Must not change: existing feature directories are probed by this name.
pub const CONFIRMATIONS_FILE: &str = ".workflow-confirmations.json";

/// Per-stage confirmation flags persisted as JSON.
///
/// Missing fields deserialize as `false`, so records written by older
/// versions of the tool remain readable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationStatus {
    /// Whether the requirements document has been signed off.
    #[serde(default)]
    pub requirements: bool,

    /// Whether the design document has been signed off.
    #[serde(default)]
    pub design: bool,

    /// Whether the task list has been signed off.
    #[serde(default)]
    pub tasks: bool,

    /// RFC3339 timestamp of the last update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ConfirmationStatus {
    /// Returns the confirmation flag for a stage.
    pub fn get(&self, stage: Stage) -> bool {
        match stage {
            Stage::Requirements => self.requirements,
            Stage::Design => self.design,
            Stage::Tasks => self.tasks,
        }
    }

    /// Sets the confirmation flag for a stage.
    pub fn set(&mut self, stage: Stage, confirmed: bool) {
        match stage {
            Stage::Requirements => self.requirements = confirmed,
            Stage::Design => self.design = confirmed,
            Stage::Tasks => self.tasks = confirmed,
        }
    }
}

/// Returns the path of the confirmation record inside a feature directory.
pub fn confirmations_path(feature_dir: &Path) -> PathBuf {
    feature_dir.join(CONFIRMATIONS_FILE)
}

/// Loads the confirmation record for a feature directory.
///
/// A missing record yields the default (all stages unconfirmed).
///
/// # Errors
///
/// Returns `WorkflowError::CorruptedConfirmations` if the record exists but
/// cannot be parsed, or a read error from the adapter.
pub fn load_confirmations(fs: &dyn FsAdapter, feature_dir: &Path) -> Result<ConfirmationStatus> {
    let path = confirmations_path(feature_dir);
    if !fs.exists(&path) {
        return Ok(ConfirmationStatus::default());
    }

    let raw = fs.read_to_string(&path)?;
    serde_json::from_str(&raw).map_err(|_| WorkflowError::CorruptedConfirmations(path))
}

/// Updates a single stage's confirmation flag, creating the record if it
/// does not exist yet.
///
/// The record is read, modified, stamped with the current time, and written
/// back in full.
///
/// # Errors
///
/// Returns an error if the existing record is corrupted or the write fails.
pub fn update_stage_confirmation(
    fs: &dyn FsAdapter,
    feature_dir: &Path,
    stage: Stage,
    confirmed: bool,
) -> Result<()> {
    let mut status = load_confirmations(fs, feature_dir)?;
    status.set(stage, confirmed);
    status.updated_at = Some(chrono::Utc::now().to_rfc3339());

    let raw = serde_json::to_string_pretty(&status)?;
    fs.write(&confirmations_path(feature_dir), &raw)?;

    tracing::debug!(
        stage = %stage,
        confirmed,
        path = %feature_dir.display(),
        "stage confirmation updated"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::fs_mock::MockFsAdapter;

    #[test]
    fn test_load_missing_record_defaults_to_unconfirmed() {
        let fs = MockFsAdapter::new();
        let status = load_confirmations(&fs, Path::new("/specs/feat")).unwrap();

        assert!(!status.requirements);
        assert!(!status.design);
        assert!(!status.tasks);
        assert!(status.updated_at.is_none());
    }

    #[test]
    fn test_update_creates_record_with_all_flags() {
        let fs = MockFsAdapter::new();
        let dir = Path::new("/specs/feat");

        update_stage_confirmation(&fs, dir, Stage::Requirements, true).unwrap();

        let status = load_confirmations(&fs, dir).unwrap();
        assert!(status.requirements);
        assert!(!status.design);
        assert!(!status.tasks);
        assert!(status.updated_at.is_some());
    }

    #[test]
    fn test_update_preserves_other_flags() {
        let fs = MockFsAdapter::new();
        let dir = Path::new("/specs/feat");

        update_stage_confirmation(&fs, dir, Stage::Requirements, true).unwrap();
        update_stage_confirmation(&fs, dir, Stage::Design, true).unwrap();
        update_stage_confirmation(&fs, dir, Stage::Requirements, false).unwrap();

        let status = load_confirmations(&fs, dir).unwrap();
        assert!(!status.requirements);
        assert!(status.design);
        assert!(!status.tasks);
    }

    #[test]
    fn test_load_corrupted_record_errors() {
        let fs = MockFsAdapter::new();
        let dir = Path::new("/specs/feat");
        fs.write(&confirmations_path(dir), "not json").unwrap();

        let result = load_confirmations(&fs, dir);
        assert!(matches!(
            result.unwrap_err(),
            WorkflowError::CorruptedConfirmations(_)
        ));
    }

    #[test]
    fn test_partial_record_fills_missing_fields() {
        let fs = MockFsAdapter::new();
        let dir = Path::new("/specs/feat");
        fs.write(&confirmations_path(dir), r#"{"requirements": true}"#)
            .unwrap();

        let status = load_confirmations(&fs, dir).unwrap();
        assert!(status.requirements);
        assert!(!status.design);
        assert!(!status.tasks);
    }
}
