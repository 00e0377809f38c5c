//! Cromwell workflow metadata
//!
//! Only the parts needed to gather outputs are modeled: the workflow name
//! and, per task, its call records. Call records stay raw JSON until a
//! task is asked for, and only `Done` calls are decoded strictly; other
//! calls contribute at most their shard index.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{CwError, Result};

/// Metadata as it appears on disk (`cromshell metadata` output)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataRaw {
    #[serde(default)]
    workflow_name: Option<String>,
    #[serde(default)]
    calls: Option<IndexMap<String, Vec<Value>>>,
}

/// Parsed workflow metadata
#[derive(Debug, Clone)]
pub struct Metadata {
    pub workflow_name: String,
    /// Task name → raw call records, in document order
    pub calls: IndexMap<String, Vec<Value>>,
}

impl Metadata {
    /// Read and parse a metadata file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CwError::MetadataNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: MetadataRaw =
            serde_json::from_str(json).map_err(|e| CwError::MalformedMetadata {
                details: format!("Invalid workflow metadata: {}", e),
            })?;

        let calls = raw.calls.ok_or_else(|| CwError::MalformedMetadata {
            details: "Failed to find <calls> in workflow metadata!".to_string(),
        })?;
        let workflow_name = raw.workflow_name.ok_or_else(|| CwError::MalformedMetadata {
            details: "Failed to find <workflowName> in workflow metadata!".to_string(),
        })?;

        Ok(Self {
            workflow_name,
            calls,
        })
    }

    /// Decoded call records for a task, `None` if the workflow never ran it
    pub fn task_calls(&self, task: &str) -> Result<Option<Vec<CallRecord>>> {
        let Some(records) = self.calls.get(task) else {
            return Ok(None);
        };

        records
            .iter()
            .map(|value| {
                CallRecord::from_value(value).map_err(|details| CwError::MalformedMetadata {
                    details: format!("Invalid call record for task <{}>: {}", task, details),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// Task name without the leading `<workflowName>.`
    pub fn task_short_name<'a>(&self, task: &'a str) -> &'a str {
        task.strip_prefix(self.workflow_name.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(task)
    }
}

/// One attempt of one shard of a task
#[derive(Debug, Clone, PartialEq)]
pub enum CallRecord {
    Done(DoneCall),
    /// Any status other than `Done`; nothing beyond the shard index is read
    Incomplete {
        shard_index: Option<i64>,
        status: String,
    },
}

/// A call that finished with status `Done`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoneCall {
    #[serde(deserialize_with = "shard_index")]
    pub shard_index: i64,
    #[serde(default)]
    pub outputs: Option<Map<String, Value>>,
}

/// Unscattered calls carry `-1`; treat them as shard 0
fn shard_index<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let idx = i64::deserialize(deserializer)?;
    Ok(idx.max(0))
}

impl CallRecord {
    /// Decode a raw record. Only `Done` records can fail.
    pub fn from_value(value: &Value) -> std::result::Result<Self, String> {
        match value.get("executionStatus") {
            Some(Value::String(s)) if s == "Done" => DoneCall::deserialize(value)
                .map(CallRecord::Done)
                .map_err(|e| e.to_string()),
            status => Ok(CallRecord::Incomplete {
                shard_index: value
                    .get("shardIndex")
                    .and_then(Value::as_i64)
                    .map(|idx| idx.max(0)),
                status: match status {
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                    None => String::new(),
                },
            }),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, CallRecord::Done(_))
    }

    pub fn as_done(&self) -> Option<&DoneCall> {
        match self {
            CallRecord::Done(done) => Some(done),
            CallRecord::Incomplete { .. } => None,
        }
    }

    pub fn shard_index(&self) -> Option<i64> {
        match self {
            CallRecord::Done(done) => Some(done.shard_index),
            CallRecord::Incomplete { shard_index, .. } => *shard_index,
        }
    }
}

impl<'de> Deserialize<'de> for CallRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        CallRecord::from_value(&value).map_err(D::Error::custom)
    }
}

/// File output: a single path or an array of paths
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OutputFiles {
    Single(String),
    Multiple(Vec<String>),
}

impl OutputFiles {
    fn into_vec(self) -> Vec<String> {
        match self {
            OutputFiles::Single(s) => vec![s],
            OutputFiles::Multiple(v) => v,
        }
    }
}

impl DoneCall {
    /// Paths of one output field, always as a list
    pub fn output_files(&self, task: &str, field: &str) -> Result<Vec<String>> {
        let value = self
            .outputs
            .as_ref()
            .and_then(|outputs| outputs.get(field))
            .ok_or_else(|| CwError::MissingOutputField {
                task: task.to_string(),
                field: field.to_string(),
                shard: self.shard_index,
            })?;

        OutputFiles::deserialize(value)
            .map(OutputFiles::into_vec)
            .map_err(|_| CwError::InvalidOutputValue {
                task: task.to_string(),
                field: field.to_string(),
                shard: self.shard_index,
            })
    }
}
