//! Specflow Core - Engine for the document-driven feature workflow.
//!
//! This crate provides the execution engine for Specflow workflows: feature
//! initialization, stage document generation, confirmation tracking, status
//! aggregation, and the runtime that ties them together.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`error`]: Error types and result type alias
//! - [`config`]: Runtime configuration and `.specflow.toml` loading
//! - [`stage`]: The three workflow stages and their file names
//! - [`tools`]: Tool registry and the file system adapter trait
//! - [`confirmations`]: The per-stage confirmation record
//! - [`status`]: Artifact probing, current stage, and progress
//! - [`documents`]: Stage document generation from templates
//! - [`response`]: Result and display-text building
//! - [`progress`]: Progress reporting for long-running workflows
//! - [`workflows`]: The workflow implementations
//! - [`runtime`]: The `WorkflowRuntime` facade
//!
//! # Example
//!
//! ```no_run
//! use specflow_core::{WorkflowConfig, WorkflowRuntime};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WorkflowConfig::load(Path::new("."))?;
//! let runtime = WorkflowRuntime::new(config)?;
//!
//! let result = runtime
//!     .init_feature("add-caching", "Cache hot lookups.", None)
//!     .await;
//! println!("{}", result.display_text);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod confirmations;
pub mod documents;
pub mod error;
pub mod progress;
pub mod response;
pub mod runtime;
pub mod stage;
pub mod status;
pub mod tools;
pub mod workflows;

// Re-export core types for convenience
pub use config::{WorkflowConfig, CONFIG_FILE};
pub use confirmations::{ConfirmationStatus, CONFIRMATIONS_FILE};
pub use error::{Result, WorkflowError};
pub use progress::ProgressReporter;
pub use response::{ErrorContext, ErrorKind, ResponseBuilder, WorkflowResult};
pub use runtime::WorkflowRuntime;
pub use stage::Stage;
pub use status::{WorkflowProgress, WorkflowStatus};
pub use tools::ToolRegistry;
pub use workflows::{init_workflow, InitOptions, PROJECT_ALREADY_EXISTS};
