//! CLI argument definitions using clap derive macros.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pipeline hook plugin CLI
///
/// Inspect the hook catalog and build task definitions locally.
#[derive(Parser, Debug)]
#[command(name = "pipehook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the target pipeline engine and hook capabilities
    Describe(DescribeCommand),

    /// Build the task definition for a hook
    Build(BuildCommand),

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
pub struct DescribeCommand {
    /// Emit raw metadata JSON instead of the human listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Hook name to build
    pub hook: String,

    /// User variable as NAME=VALUE (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Write the serialized task to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
