//! cw CLI - Cromwell on MGI compute

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use cw::error::{CwError, FixSuggestion};
use cw::{outputs, pipelines, Reporter};

#[derive(Parser)]
#[command(name = "cw")]
#[command(about = "Cromwell on MGI Compute")]
#[command(version)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Gather outputs from a Cromwell run
    ///
    /// Give the metadata file, destination path, and the outputs to gather.
    /// Make sure the destination exists. Generate the metadata file with
    /// `cromshell metadata <WORKFLOW_ID>`.
    ///
    /// For tasks and outputs, give a known pipeline or a YAML/JSON file
    /// mapping task names to lists of outputs.
    Outputs {
        /// Workflow metadata JSON
        metadata_file: PathBuf,

        /// Existing directory to copy outputs into
        destination: PathBuf,

        /// Known pipeline name or tasks-and-outputs file
        tasks_and_outputs: String,
    },

    /// List known pipelines and the outputs they gather
    Pipelines,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    let result = match cli.command {
        Commands::Outputs {
            metadata_file,
            destination,
            tasks_and_outputs,
        } => gather_outputs(&metadata_file, &destination, &tasks_and_outputs),
        Commands::Pipelines => list_pipelines(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn gather_outputs(
    metadata_file: &Path,
    destination: &Path,
    tasks_and_outputs: &str,
) -> Result<(), CwError> {
    let mut reporter = Reporter::stdio();
    let summary = outputs::run(metadata_file, destination, tasks_and_outputs, &mut reporter)?;
    tracing::debug!(?summary, "gather finished");
    Ok(())
}

fn list_pipelines() -> Result<(), CwError> {
    for (name, spec) in pipelines::all() {
        println!("{}", name.cyan().bold());
        for (task, fields) in spec.iter() {
            println!("  {}: {}", task, fields.join(" "));
        }
    }
    Ok(())
}
