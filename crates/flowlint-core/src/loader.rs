//! Loading workflow documents from disk.
//!
//! Every failure is classified before a document reaches the rule engine, so
//! validation itself never has to represent a failed load.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::workflow::Workflow;

/// Errors that can occur while loading a workflow file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Invalid file extension: {extension} (expected .json)")]
    InvalidExtension { path: PathBuf, extension: String },

    #[error("Failed to read file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Workflow must be a JSON object")]
    NotAnObject(PathBuf),
}

impl LoadError {
    /// The path the failed load was attempted on.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound(path)
            | LoadError::NotAFile(path)
            | LoadError::NotAnObject(path)
            | LoadError::InvalidExtension { path, .. }
            | LoadError::Read { path, .. }
            | LoadError::InvalidJson { path, .. } => path,
        }
    }
}

/// A successfully parsed workflow together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedWorkflow {
    pub path: PathBuf,
    pub workflow: Workflow,
}

/// Load a single workflow file.
///
/// Checks run in order: existence, regular file, `.json` extension
/// (case-insensitive), readability, JSON syntax, object root.
pub fn load_workflow(path: impl AsRef<Path>) -> Result<LoadedWorkflow, LoadError> {
    let path = path.as_ref().to_path_buf();

    if !path.exists() {
        return Err(LoadError::NotFound(path));
    }
    if !path.is_file() {
        return Err(LoadError::NotAFile(path));
    }

    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    if !extension.eq_ignore_ascii_case(".json") {
        return Err(LoadError::InvalidExtension { path, extension });
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(source) => return Err(LoadError::Read { path, source }),
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(source) => return Err(LoadError::InvalidJson { path, source }),
    };

    if !value.is_object() {
        return Err(LoadError::NotAnObject(path));
    }

    Ok(LoadedWorkflow {
        path,
        workflow: Workflow::new(value),
    })
}

/// Load several workflow files independently, preserving input order.
pub fn load_workflows<P: AsRef<Path>>(paths: &[P]) -> Vec<Result<LoadedWorkflow, LoadError>> {
    paths.iter().map(|p| load_workflow(p)).collect()
}
