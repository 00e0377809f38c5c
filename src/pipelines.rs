//! Known pipelines
//!
//! Built-in tasks-and-outputs for pipelines we run often. To add a
//! pipeline, append an entry to `KNOWN_PIPELINES`.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::output_spec::OutputSpec;

type PipelineDef = (&'static str, &'static [(&'static str, &'static [&'static str])]);

const KNOWN_PIPELINES: &[PipelineDef] = &[(
    "encode_hic",
    &[
        // merged bam
        ("hic.merge_replicates", &["bam"]),
        ("hic.calculate_stats", &["stats", "stats_json"]),
        ("hic.add_norm", &["output_hic"]),
        ("hic.create_eigenvector", &["eigenvector_bigwig", "eigenvector_wig"]),
        ("hic.create_eigenvector_10kb", &["eigenvector_bigwig", "eigenvector_wig"]),
        ("hic.arrowhead", &["out_file"]),
        ("hic.hiccups", &["merged_loops"]),
    ],
)];

static REGISTRY: Lazy<IndexMap<&'static str, OutputSpec>> = Lazy::new(|| {
    KNOWN_PIPELINES
        .iter()
        .map(|(name, tasks)| {
            let spec: OutputSpec = tasks
                .iter()
                .map(|(task, outputs)| (*task, outputs.iter().copied()))
                .collect();
            (*name, spec)
        })
        .collect()
});

/// Look up a known pipeline by exact name
pub fn get(name: &str) -> Option<&'static OutputSpec> {
    REGISTRY.get(name)
}

/// All known pipelines in registry order
pub fn all() -> impl Iterator<Item = (&'static str, &'static OutputSpec)> {
    REGISTRY.iter().map(|(name, spec)| (*name, spec))
}
