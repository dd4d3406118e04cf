use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seqset",
    about = "Merge named sequence sets and audit every naming conflict",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file (defaults to ./seqset.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// One `sequence<delimiter>name` binding per line
    Pairs,
    /// FASTA records: the sequence is the key, the header id the name
    Fasta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportTarget {
    /// Colored report on stderr
    Terminal,
    /// Conflicts logged through tracing
    Log,
    /// Conflicts dropped
    #[value(name = "none")]
    Discard,
}

#[derive(Subcommand)]
pub enum Command {
    /// All sequences of both inputs
    Union(MergeArgs),
    /// Sequences present in both inputs
    Intersect(MergeArgs),
    /// Sequences of LEFT missing from RIGHT
    Difference(MergeArgs),
    /// Load a single input and print its bindings
    Show(ShowArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    #[arg(long, default_value = "pairs")]
    pub input: InputFormat,
    #[arg(long, default_value = "terminal")]
    pub report: ReportTarget,
    /// Write the conflict report to a file instead
    #[arg(long)]
    pub report_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowArgs {
    pub path: PathBuf,
    #[arg(long, default_value = "pairs")]
    pub input: InputFormat,
}
