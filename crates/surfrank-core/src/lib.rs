//! Surfrank Core Library
//!
//! Core functionality for the surfrank PageRank estimator.
//!
//! # Features
//! - Link-graph corpus model with pages interned to dense ids
//! - Directory crawler for small HTML corpora
//! - Random-surfer transition model and seedable sampling estimator
//! - Fixed-point iterative estimator with convergence reporting

pub mod crawl;
pub mod error;
pub mod graph;
pub mod rank;

pub use crawl::crawl_corpus;
pub use error::{Error, Result, SurfrankError};
pub use graph::{extract_links, Corpus, CorpusBuilder};
pub use rank::{
    iterate_pagerank, normalize, sample_pagerank, sample_pagerank_with_rng, transition_model,
    Iterated, IterationConfig, SamplingConfig,
};

/// Default damping factor shared by both estimators
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of random-surfer samples
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default seed for the sampling estimator
pub const DEFAULT_SEED: u64 = 42;

/// Default convergence threshold for the iterative estimator
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Default round cap for the iterative estimator
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
