//! Document template crate for Specflow.
//!
//! This crate provides template loading and rendering capabilities using minijinja.
//! It manages the markdown skeletons for the workflow documents (requirements,
//! design, tasks) and supports user-provided template directories.
//!
//! # Examples
//!
//! ```
//! use specflow_doc::{TemplateManager, TemplateEngine, DocContext};
//!
//! let manager = TemplateManager::builtin()?;
//!
//! let context = DocContext::new("add-caching")
//!     .with_introduction("Cache hot paths to cut latency.");
//!
//! let document = manager.render("requirements", &context)?;
//! assert!(document.contains("add-caching"));
//! # Ok::<(), specflow_doc::TemplateError>(())
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod manager;

// Re-export public types for convenience
pub use context::DocContext;
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use manager::TemplateManager;
