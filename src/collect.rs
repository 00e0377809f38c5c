//! Shard collection
//!
//! Groups a task's call records by shard and resolves the requested
//! output fields of every `Done` call to a flat list of paths.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::Result;
use crate::metadata::CallRecord;

/// Files produced by one `Done` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardFiles {
    pub shard_index: i64,
    pub files: Vec<String>,
}

/// Collected outputs for one task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShardOutputs {
    /// One entry per `Done` call, in call order
    pub shards: Vec<ShardFiles>,
    /// Every shard index seen, done or not
    pub shard_indices: BTreeSet<i64>,
}

impl ShardOutputs {
    pub fn done_count(&self) -> usize {
        self.shards.len()
    }

    pub fn shard_count(&self) -> usize {
        self.shard_indices.len()
    }
}

/// Collect the files of `fields` from every `Done` call of `task`.
///
/// Retries of the same shard that both finished `Done` are both kept.
/// A `Done` call missing one of `fields` is an error.
pub fn collect_shards(task: &str, calls: &[CallRecord], fields: &[String]) -> Result<ShardOutputs> {
    let mut collected = ShardOutputs::default();

    for call in calls {
        if let Some(idx) = call.shard_index() {
            collected.shard_indices.insert(idx);
        }
        let Some(done) = call.as_done() else {
            continue;
        };

        let mut files = Vec::new();
        for field in fields {
            files.extend(done.output_files(task, field)?);
        }
        collected.shards.push(ShardFiles {
            shard_index: done.shard_index,
            files,
        });
    }

    debug!(
        task,
        done = collected.done_count(),
        shards = collected.shard_count(),
        "collected shard outputs"
    );
    Ok(collected)
}
