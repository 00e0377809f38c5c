//! Copy collected shard files into the destination tree
//!
//! Layout for a task directory `dest`:
//! - one `Done` call: `dest/<file>`
//! - several `Done` calls: `dest/shard<N>/<file>`
//!
//! The choice depends on how many calls finished, not on how many shards
//! the task had, so a scatter where a single shard succeeded is laid out
//! flat.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collect::ShardFiles;
use crate::error::{CwError, Result};
use crate::report::Reporter;

/// What a materialize pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Destination paths written
    pub copied: Vec<PathBuf>,
    /// Source paths that did not exist
    pub missing: Vec<PathBuf>,
}

/// Directory a shard's files land in
pub fn shard_dir(dest: &Path, shard_index: i64, shard_total: usize) -> PathBuf {
    if shard_total > 1 {
        dest.join(format!("shard{}", shard_index))
    } else {
        dest.to_path_buf()
    }
}

/// Copy every shard's files under `dest`.
///
/// Missing source files are reported and skipped. A source that already
/// sits at its target path, or any other I/O failure, stops the run.
pub fn materialize<O: Write, E: Write>(
    shards: &[ShardFiles],
    dest: &Path,
    reporter: &mut Reporter<O, E>,
) -> Result<MaterializeReport> {
    let mut report = MaterializeReport::default();

    for shard in shards {
        if shard.files.is_empty() {
            continue;
        }

        let dir = shard_dir(dest, shard.shard_index, shards.len());
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), shard = shard.shard_index, "created output directory");

        for file in &shard.files {
            let src = Path::new(file);
            if !src.exists() {
                reporter.file_not_found(src)?;
                report.missing.push(src.to_path_buf());
                continue;
            }

            let name = src.file_name().ok_or_else(|| CwError::InvalidSourcePath {
                path: src.to_path_buf(),
            })?;
            let target = dir.join(name);
            // fs::copy truncates the target first; copying onto the source would empty it
            if target.exists() && same_file::is_same_file(src, &target)? {
                return Err(CwError::SameFile {
                    path: src.to_path_buf(),
                });
            }

            reporter.copy(src, &dir)?;
            fs::copy(src, &target)?;
            report.copied.push(target);
        }
    }

    Ok(report)
}
