//! Workflow document generation.
//!
//! Renders the stage document skeletons (requirements, design, tasks) from
//! templates and writes them into the feature directory. Generation never
//! overwrites an existing document; that case is reported as a soft failure
//! rather than an error.

use crate::error::Result;
use crate::stage::Stage;
use crate::tools::fs::FsAdapter;
use serde::Serialize;
use specflow_doc::{DocContext, TemplateEngine, TemplateManager};
use std::path::{Path, PathBuf};

/// Result of a document generation attempt.
///
/// `generated: false` is a soft failure: the preconditions for writing the
/// document were not met, but nothing went wrong at the IO or template
/// level. Hard failures surface as errors instead.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    /// Whether the document was written.
    pub generated: bool,

    /// Path of the (attempted) document.
    pub document_path: PathBuf,

    /// Explanation when `generated` is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl GenerationOutcome {
    fn written(document_path: PathBuf) -> Self {
        Self {
            generated: true,
            document_path,
            reason: None,
        }
    }

    fn skipped(document_path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            generated: false,
            document_path,
            reason: Some(reason.into()),
        }
    }
}

/// Creates the initial requirements document for a feature.
///
/// # Errors
///
/// Returns an error if template rendering or the write fails.
pub fn create_requirements_document(
    fs: &dyn FsAdapter,
    feature_dir: &Path,
    feature_name: &str,
    introduction: &str,
    templates: &TemplateManager,
) -> Result<GenerationOutcome> {
    create_stage_document(
        fs,
        feature_dir,
        Stage::Requirements,
        feature_name,
        introduction,
        templates,
    )
}

/// Creates the document for a workflow stage from its template.
///
/// The template name matches the stage name (`requirements`, `design`,
/// `tasks`). An already existing document or an empty rendering result
/// yields `generated: false` without touching the filesystem.
///
/// # Errors
///
/// Returns an error if template rendering or the write fails.
#[tracing::instrument(skip(fs, templates), fields(stage = %stage, feature_name = %feature_name))]
pub fn create_stage_document(
    fs: &dyn FsAdapter,
    feature_dir: &Path,
    stage: Stage,
    feature_name: &str,
    introduction: &str,
    templates: &TemplateManager,
) -> Result<GenerationOutcome> {
    let document_path = feature_dir.join(stage.document_file());

    if fs.exists(&document_path) {
        return Ok(GenerationOutcome::skipped(
            document_path,
            format!("{} already exists", stage.document_file()),
        ));
    }

    let context = DocContext::new(feature_name)
        .with_introduction(introduction)
        .with_created_at(chrono::Utc::now().to_rfc3339());
    let content = templates.render(stage.as_str(), &context)?;

    if content.trim().is_empty() {
        return Ok(GenerationOutcome::skipped(
            document_path,
            "template produced an empty document",
        ));
    }

    fs.write(&document_path, &content)?;

    tracing::info!(
        document = %document_path.display(),
        "stage document generated"
    );

    Ok(GenerationOutcome::written(document_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::fs_mock::MockFsAdapter;
    use std::path::PathBuf;

    fn feature_dir() -> PathBuf {
        PathBuf::from("/specs/test-feature")
    }

    #[test]
    fn test_creates_requirements_document() {
        let fs = MockFsAdapter::new();
        let templates = TemplateManager::builtin().unwrap();

        let outcome = create_requirements_document(
            &fs,
            &feature_dir(),
            "test-feature",
            "A short introduction.",
            &templates,
        )
        .unwrap();

        assert!(outcome.generated);
        assert!(outcome.reason.is_none());

        let content = fs
            .read_to_string(&feature_dir().join("requirements.md"))
            .unwrap();
        assert!(content.contains("test-feature"));
        assert!(content.contains("A short introduction."));
    }

    #[test]
    fn test_does_not_overwrite_existing_document() {
        let fs = MockFsAdapter::new();
        let templates = TemplateManager::builtin().unwrap();
        let existing = feature_dir().join("requirements.md");
        fs.write(&existing, "original content").unwrap();

        let outcome =
            create_requirements_document(&fs, &feature_dir(), "test-feature", "", &templates)
                .unwrap();

        assert!(!outcome.generated);
        assert!(outcome.reason.unwrap().contains("already exists"));
        assert_eq!(fs.read_to_string(&existing).unwrap(), "original content");
    }

    #[test]
    fn test_empty_rendering_is_soft_failure() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("requirements.j2"), "{# empty #}").unwrap();
        let templates = TemplateManager::from_dir(temp_dir.path()).unwrap();

        let fs = MockFsAdapter::new();
        let outcome =
            create_requirements_document(&fs, &feature_dir(), "test-feature", "", &templates)
                .unwrap();

        assert!(!outcome.generated);
        assert!(!fs.is_file(&feature_dir().join("requirements.md")));
    }

    #[test]
    fn test_creates_design_and_tasks_documents() {
        let fs = MockFsAdapter::new();
        let templates = TemplateManager::builtin().unwrap();

        for stage in [Stage::Design, Stage::Tasks] {
            let outcome = create_stage_document(
                &fs,
                &feature_dir(),
                stage,
                "test-feature",
                "",
                &templates,
            )
            .unwrap();
            assert!(outcome.generated, "{stage} document should be generated");
            assert!(fs.is_file(&feature_dir().join(stage.document_file())));
        }
    }

    #[test]
    fn test_missing_template_is_hard_failure() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let templates = TemplateManager::from_dir(temp_dir.path()).unwrap();

        let fs = MockFsAdapter::new();
        let result =
            create_requirements_document(&fs, &feature_dir(), "test-feature", "", &templates);

        assert!(result.is_err());
    }
}
