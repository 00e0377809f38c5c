//! Tasks-and-outputs specification
//!
//! Maps a task name (`<workflow>.<task>`) to the output names to gather
//! from it. Order is preserved from the source document, so tasks are
//! processed in the order they are declared.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CwError, Result};
use crate::pipelines;

/// Task name → output names to gather
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputSpec(IndexMap<String, Vec<String>>);

impl OutputSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task; a repeated task name replaces the earlier outputs
    pub fn insert(&mut self, task: impl Into<String>, outputs: Vec<String>) {
        self.0.insert(task.into(), outputs);
    }

    pub fn get(&self, task: &str) -> Option<&[String]> {
        self.0.get(task).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tasks in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Load from a YAML (or JSON) file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| CwError::InvalidSpecFile {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }
}

impl<K, V> FromIterator<(K, V)> for OutputSpec
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

/// Resolve a user token to a specification.
///
/// An existing file always wins over a built-in pipeline of the same name.
pub fn resolve(token: &str) -> Result<OutputSpec> {
    let path = Path::new(token);
    if path.is_file() {
        debug!(path = %path.display(), "loading tasks and outputs from file");
        return OutputSpec::from_file(path);
    }

    if let Some(spec) = pipelines::get(token) {
        debug!(pipeline = token, tasks = spec.len(), "using known pipeline");
        return Ok(spec.clone());
    }

    Err(CwError::UnknownPipeline {
        token: token.to_string(),
    })
}
