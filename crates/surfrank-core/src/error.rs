//! Error types for surfrank

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using SurfrankError
pub type Result<T> = std::result::Result<T, SurfrankError>;

/// Error type alias for convenience
pub type Error = SurfrankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for surfrank
#[derive(Debug, Error)]
pub enum SurfrankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("No HTML pages found under {}", .0.display())]
    NoPages(PathBuf),

    #[error("Corpus has no pages")]
    EmptyCorpus,

    #[error("Page id {0} is not in the corpus")]
    UnknownPage(usize),

    #[error("Damping factor {0} must lie in [0, 1]")]
    InvalidDamping(f64),

    #[error("Sample count must be positive")]
    InvalidSamples,

    #[error("No convergence after {iterations} iterations (last delta {delta})")]
    ConvergenceFailure { iterations: usize, delta: f64 },
}

impl SurfrankError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoPages(_) => exit_codes::NOT_FOUND,
            Self::EmptyCorpus
            | Self::UnknownPage(_)
            | Self::InvalidDamping(_)
            | Self::InvalidSamples => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
