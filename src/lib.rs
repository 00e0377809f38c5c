//! cw - gather task outputs from Cromwell workflow runs

pub mod collect;
pub mod error;
pub mod materialize;
pub mod metadata;
pub mod output_spec;
pub mod outputs;
pub mod pipelines;
pub mod report;

pub use collect::{collect_shards, ShardFiles, ShardOutputs};
pub use error::{CwError, FixSuggestion, Result};
pub use materialize::{materialize, MaterializeReport};
pub use metadata::{CallRecord, DoneCall, Metadata};
pub use output_spec::{resolve, OutputSpec};
pub use outputs::RunSummary;
pub use report::Reporter;
