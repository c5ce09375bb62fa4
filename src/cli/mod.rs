//! CLI argument parsing for starpath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod output;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;
pub use parse::AlgorithmChoice;
use parse::parse_algorithm_choice;

/// Starpath - every optimal route between two bodies
#[derive(Parser, Debug)]
#[command(name = "starpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging and timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `starpath_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "STARPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find every optimal path between two vertices
    Search {
        /// Graph document (.json, .toml, .yaml)
        graph: PathBuf,

        /// Start vertex: name (case-insensitive) or 0-based index
        from: String,

        /// End vertex: name (case-insensitive) or 0-based index
        to: String,

        /// Search algorithm, or `all` to run every engine
        #[arg(long, short, value_parser = parse_algorithm_choice)]
        algorithm: Option<AlgorithmChoice>,

        /// Relative tolerance for treating two costs as equal
        #[arg(long)]
        tolerance: Option<f64>,

        /// Let dijkstra search graphs with negative edge weights
        #[arg(long)]
        allow_negative_weights: bool,

        /// Fail with a data error when no path exists
        #[arg(long)]
        require_path: bool,
    },

    /// Show graph flags, counts and per-vertex degrees
    Info {
        /// Graph document (.json, .toml, .yaml)
        graph: PathBuf,
    },

    /// List the vertex catalogue
    Vertices {
        /// Graph document (.json, .toml, .yaml)
        graph: PathBuf,

        /// Show vertex counts per category instead of the list
        #[arg(long, conflicts_with = "ranked")]
        by_category: bool,

        /// Order vertices by connectivity (in + out degree)
        #[arg(long)]
        ranked: bool,
    },
}
