//! Workflow implementations for Specflow.
//!
//! Each workflow is a standalone async function taking the tool adapters it
//! needs, so tests can drive it against mock implementations.

pub mod init;

pub use init::{init_workflow, InitOptions, PROJECT_ALREADY_EXISTS};
