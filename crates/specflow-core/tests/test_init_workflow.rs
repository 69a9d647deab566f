//! Integration tests for the init workflow.
//!
//! These tests exercise the full workflow against a real file system in a
//! temporary directory, going through the public runtime API.

use serde_json::json;
use specflow_core::{WorkflowConfig, WorkflowRuntime, PROJECT_ALREADY_EXISTS};
use std::fs;
use tempfile::TempDir;

fn runtime_for(temp_dir: &TempDir) -> WorkflowRuntime {
    let config = WorkflowConfig::new(temp_dir.path().to_path_buf());
    WorkflowRuntime::new(config).unwrap()
}

#[tokio::test]
async fn test_fresh_init_creates_all_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let runtime = runtime_for(&temp_dir);

    let result = runtime
        .init_feature("add-caching", "Cache hot lookups.", None)
        .await;

    assert!(result.is_success(), "init failed: {}", result.display_text);
    assert_eq!(result.data["featureName"], "add-caching");
    assert_eq!(result.data["currentStage"], "requirements");

    let feature_dir = runtime.config.doc_root.join("add-caching");
    assert!(feature_dir.is_dir());

    let requirements = fs::read_to_string(feature_dir.join("requirements.md")).unwrap();
    assert!(requirements.contains("add-caching"));
    assert!(requirements.contains("Cache hot lookups."));

    // Only the requirements document exists after init.
    assert!(!feature_dir.join("design.md").exists());
    assert!(!feature_dir.join("tasks.md").exists());

    // All stages start unconfirmed.
    let confirmations: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(feature_dir.join(".workflow-confirmations.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(confirmations["requirements"], false);
    assert_eq!(confirmations["design"], false);
    assert_eq!(confirmations["tasks"], false);
}

#[tokio::test]
async fn test_init_is_rejected_when_artifact_exists() {
    let temp_dir = TempDir::new().unwrap();
    let runtime = runtime_for(&temp_dir);

    let feature_dir = runtime.config.doc_root.join("add-caching");
    fs::create_dir_all(&feature_dir).unwrap();
    fs::write(feature_dir.join("design.md"), "# Existing design").unwrap();

    let result = runtime.init_feature("add-caching", "", None).await;

    assert!(!result.is_success());
    assert_eq!(result.data["error"], PROJECT_ALREADY_EXISTS);
    assert_eq!(result.data["existingFiles"], json!(["Design document"]));
    assert!(result.display_text.contains("Design document"));

    // The existing document is untouched and no new artifacts appear.
    assert_eq!(
        fs::read_to_string(feature_dir.join("design.md")).unwrap(),
        "# Existing design"
    );
    assert!(!feature_dir.join("requirements.md").exists());
    assert!(!feature_dir.join(".workflow-confirmations.json").exists());
}

#[tokio::test]
async fn test_all_artifacts_listed_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let runtime = runtime_for(&temp_dir);

    let feature_dir = runtime.config.doc_root.join("add-caching");
    fs::create_dir_all(&feature_dir).unwrap();
    fs::write(feature_dir.join(".workflow-confirmations.json"), "{}").unwrap();
    fs::write(feature_dir.join("tasks.md"), "# Tasks").unwrap();
    fs::write(feature_dir.join("design.md"), "# Design").unwrap();
    fs::write(feature_dir.join("requirements.md"), "# Reqs").unwrap();

    let result = runtime.init_feature("add-caching", "", None).await;

    assert!(!result.is_success());
    assert_eq!(
        result.data["existingFiles"],
        json!([
            "Requirements document",
            "Design document",
            "Task list",
            "Workflow status"
        ])
    );
    assert_eq!(result.data["progress"]["completedStages"], 3);
    assert_eq!(result.data["progress"]["percent"], 100);
}

#[tokio::test]
async fn test_double_init_reports_existing_project() {
    let temp_dir = TempDir::new().unwrap();
    let runtime = runtime_for(&temp_dir);

    let first = runtime.init_feature("add-caching", "", None).await;
    assert!(first.is_success());

    let second = runtime.init_feature("add-caching", "", None).await;
    assert!(!second.is_success());
    assert_eq!(second.data["error"], PROJECT_ALREADY_EXISTS);
    // requirements.md and the confirmation record both survived the first run.
    assert_eq!(
        second.data["existingFiles"],
        json!(["Requirements document", "Workflow status"])
    );
}

#[tokio::test]
async fn test_two_features_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let runtime = runtime_for(&temp_dir);

    let first = runtime.init_feature("feature-a", "", None).await;
    let second = runtime.init_feature("feature-b", "", None).await;

    assert!(first.is_success());
    assert!(second.is_success());
    assert!(runtime
        .config
        .doc_root
        .join("feature-a/requirements.md")
        .exists());
    assert!(runtime
        .config
        .doc_root
        .join("feature-b/requirements.md")
        .exists());
}

#[tokio::test]
async fn test_custom_template_directory_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = temp_dir.path().join("doc-templates");
    fs::create_dir_all(&template_dir).unwrap();
    fs::write(
        template_dir.join("requirements.j2"),
        "# Custom skeleton for {{ feature_name }}\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join(".specflow.toml"),
        "template_dir = \"doc-templates\"\n",
    )
    .unwrap();

    let config = WorkflowConfig::load(temp_dir.path()).unwrap();
    let runtime = WorkflowRuntime::new(config).unwrap();

    let result = runtime.init_feature("add-caching", "", None).await;
    assert!(result.is_success());

    let requirements = fs::read_to_string(
        runtime
            .config
            .doc_root
            .join("add-caching/requirements.md"),
    )
    .unwrap();
    assert_eq!(requirements, "# Custom skeleton for add-caching\n");
}

#[tokio::test]
async fn test_configured_doc_root_is_respected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".specflow.toml"), "doc_root = \"specs\"\n").unwrap();

    let config = WorkflowConfig::load(temp_dir.path()).unwrap();
    let runtime = WorkflowRuntime::new(config).unwrap();

    let result = runtime.init_feature("add-caching", "", None).await;
    assert!(result.is_success());
    assert!(temp_dir
        .path()
        .join("specs/add-caching/requirements.md")
        .exists());
}
