//! Workflow stage definitions.
//!
//! A feature moves through three sequential document stages: requirements,
//! design, and tasks. Each stage owns one markdown document in the feature
//! directory and one confirmation flag in the confirmation record.

use crate::error::WorkflowError;
use std::fmt;
use std::str::FromStr;

/// Workflow stage enumeration.
///
/// Stages are sequential: a feature starts at `Requirements` and ends at
/// `Tasks`. Each stage maps to a fixed document file name that must not
/// change, since existing feature directories are probed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Requirements gathering stage.
    Requirements,

    /// Technical design stage.
    Design,

    /// Task breakdown stage.
    Tasks,
}

impl Stage {
    /// All stages in workflow order.
    pub const ALL: [Stage; 3] = [Stage::Requirements, Stage::Design, Stage::Tasks];

    /// Returns the string representation of the stage.
    ///
    /// This is used for serialization into the confirmation record and the
    /// response payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Requirements => "requirements",
            Stage::Design => "design",
            Stage::Tasks => "tasks",
        }
    }

    /// Returns the fixed document file name for this stage.
    pub fn document_file(&self) -> &'static str {
        match self {
            Stage::Requirements => "requirements.md",
            Stage::Design => "design.md",
            Stage::Tasks => "tasks.md",
        }
    }

    /// Returns the human-readable name used in user-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Requirements => "Requirements document",
            Stage::Design => "Design document",
            Stage::Tasks => "Task list",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stage {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requirements" => Ok(Stage::Requirements),
            "design" => Ok(Stage::Design),
            "tasks" => Ok(Stage::Tasks),
            other => Err(WorkflowError::InvalidStage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_convert_stage_to_string() {
        assert_eq!(Stage::Requirements.as_str(), "requirements");
        assert_eq!(Stage::Design.as_str(), "design");
        assert_eq!(Stage::Tasks.as_str(), "tasks");
    }

    #[test]
    fn test_should_parse_stage_from_string() {
        assert_eq!("requirements".parse::<Stage>().unwrap(), Stage::Requirements);
        assert_eq!("design".parse::<Stage>().unwrap(), Stage::Design);
        assert_eq!("tasks".parse::<Stage>().unwrap(), Stage::Tasks);
        assert!("invalid".parse::<Stage>().is_err());
    }

    #[test]
    fn test_should_map_stage_to_document_file() {
        assert_eq!(Stage::Requirements.document_file(), "requirements.md");
        assert_eq!(Stage::Design.document_file(), "design.md");
        assert_eq!(Stage::Tasks.document_file(), "tasks.md");
    }

    #[test]
    fn test_should_expose_display_names() {
        assert_eq!(Stage::Requirements.display_name(), "Requirements document");
        assert_eq!(Stage::Design.display_name(), "Design document");
        assert_eq!(Stage::Tasks.display_name(), "Task list");
    }

    #[test]
    fn test_all_is_in_workflow_order() {
        assert_eq!(
            Stage::ALL,
            [Stage::Requirements, Stage::Design, Stage::Tasks]
        );
    }

    #[test]
    fn test_should_display_stage() {
        assert_eq!(format!("{}", Stage::Requirements), "requirements");
        assert_eq!(format!("{}", Stage::Tasks), "tasks");
    }
}
