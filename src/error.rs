//! Error types with fix suggestions
//!
//! Error code ranges:
//! - CW-000-009: Input errors (metadata file, destination)
//! - CW-010-019: Tasks-and-outputs resolution errors
//! - CW-020-029: Metadata document errors
//! - CW-030-039: Output field / copy errors

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CwError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum CwError {
    // ─────────────────────────────────────────────────────────────
    // Input errors (CW-000 to CW-001)
    // ─────────────────────────────────────────────────────────────

    #[error("CW-000: Metadata file <{}> does not exist!", .path.display())]
    MetadataNotFound { path: PathBuf },

    #[error("CW-001: Destination directory <{}> does not exist!", .path.display())]
    DestinationNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Tasks-and-outputs errors (CW-010 to CW-011)
    // ─────────────────────────────────────────────────────────────

    #[error("CW-010: No such known pipeline <{token}>.")]
    UnknownPipeline { token: String },

    #[error("CW-011: Invalid tasks-and-outputs file <{}>: {details}", .path.display())]
    InvalidSpecFile { path: PathBuf, details: String },

    // ─────────────────────────────────────────────────────────────
    // Metadata errors (CW-020)
    // ─────────────────────────────────────────────────────────────

    #[error("CW-020: {details}")]
    MalformedMetadata { details: String },

    // ─────────────────────────────────────────────────────────────
    // Output errors (CW-030 to CW-033)
    // ─────────────────────────────────────────────────────────────

    #[error("CW-030: Output <{field}> not found for task <{task}> shard {shard}")]
    MissingOutputField { task: String, field: String, shard: i64 },

    #[error("CW-031: Output <{field}> of task <{task}> shard {shard} is not a path or list of paths")]
    InvalidOutputValue { task: String, field: String, shard: i64 },

    #[error("CW-032: Cannot copy <{}>: path has no file name", .path.display())]
    InvalidSourcePath { path: PathBuf },

    #[error("CW-033: Cannot copy <{}> onto itself", .path.display())]
    SameFile { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for CwError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            CwError::MetadataNotFound { .. } => {
                Some("Generate the metadata file with `cromshell metadata <WORKFLOW_ID>`")
            }
            CwError::DestinationNotFound { .. } => {
                Some("Create the destination directory before gathering outputs")
            }
            CwError::UnknownPipeline { .. } => {
                Some("Give a tasks-and-outputs YAML file or a known pipeline (see `cw pipelines`)")
            }
            CwError::InvalidSpecFile { .. } => {
                Some("Use a mapping of task name to a list of output names, e.g. `hic.hiccups: [merged_loops]`")
            }
            CwError::MalformedMetadata { .. } => {
                Some("Check the file is complete Cromwell metadata JSON with workflowName and calls")
            }
            CwError::MissingOutputField { .. } => {
                Some("Check the output name against the task's outputs in the metadata")
            }
            CwError::InvalidOutputValue { .. } => {
                Some("Only File and Array[File] outputs can be gathered")
            }
            CwError::InvalidSourcePath { .. } => Some("Check the output paths in the metadata"),
            CwError::SameFile { .. } => {
                Some("Choose a destination outside the workflow's execution directories")
            }
            CwError::Io(_) => Some("Check file path and permissions"),
        }
    }
}
