//! Gather outputs from a Cromwell run
//!
//! Ties the pieces together: resolve the tasks and outputs, then for each
//! task collect its `Done` shards and copy their files under
//! `<destination>/<task short name>/`.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::collect::collect_shards;
use crate::error::{CwError, Result};
use crate::materialize::materialize;
use crate::metadata::Metadata;
use crate::output_spec::{self, OutputSpec};
use crate::report::Reporter;

/// Counters for one gather run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tasks_processed: usize,
    pub tasks_skipped: usize,
    pub files_copied: usize,
    pub files_missing: usize,
}

/// Run a full gather: load the metadata, check the destination, resolve
/// `tasks_and_outputs`, then copy every task's files.
pub fn run<O: Write, E: Write>(
    metadata_file: &Path,
    destination: &Path,
    tasks_and_outputs: &str,
    reporter: &mut Reporter<O, E>,
) -> Result<RunSummary> {
    let metadata = Metadata::load(metadata_file)?;

    if !destination.is_dir() {
        return Err(CwError::DestinationNotFound {
            path: destination.to_path_buf(),
        });
    }

    let spec = output_spec::resolve(tasks_and_outputs)?;
    gather(&metadata, &spec, destination, reporter)
}

/// Copy the outputs named in `spec` from an already loaded run.
///
/// Tasks are processed in `spec` order. A task missing from the metadata
/// is skipped with a warning; files already copied for earlier tasks stay
/// in place if a later task fails.
pub fn gather<O: Write, E: Write>(
    metadata: &Metadata,
    spec: &OutputSpec,
    destination: &Path,
    reporter: &mut Reporter<O, E>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (task, fields) in spec.iter() {
        reporter.task_start(task, fields)?;

        let Some(calls) = metadata.task_calls(task)? else {
            reporter.task_not_found(task)?;
            summary.tasks_skipped += 1;
            continue;
        };

        let collected = collect_shards(task, &calls, fields)?;
        reporter.shards_done(collected.done_count(), collected.shard_count())?;

        let task_dir = destination.join(metadata.task_short_name(task));
        debug!(task, dir = %task_dir.display(), "gathering task outputs");
        let copied = materialize(&collected.shards, &task_dir, reporter)?;

        summary.tasks_processed += 1;
        summary.files_copied += copied.copied.len();
        summary.files_missing += copied.missing.len();
    }

    reporter.done()?;
    Ok(summary)
}
