//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use surfrank_core::{
    DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_SEED, DEFAULT_TOLERANCE,
};

#[derive(Parser)]
#[command(name = "surfrank")]
#[command(version, about = "Estimate PageRank for a directory of HTML pages")]
pub struct Cli {
    /// Directory containing the HTML corpus
    pub corpus: PathBuf,

    /// Probability of following a link rather than teleporting
    #[arg(short, long, default_value_t = DEFAULT_DAMPING)]
    pub damping: f64,

    /// Number of random-surfer samples
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Seed for the sampling estimator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Convergence threshold for the iterative estimator
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Iteration cap before reporting convergence failure
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
}
