//! Sampling estimator: simulate the random surfer and count visits

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{Result, SurfrankError};
use crate::graph::Corpus;
use crate::rank::transition::transition_model;
use crate::{DEFAULT_DAMPING, DEFAULT_SAMPLES, DEFAULT_SEED};

/// Tuning for [`sample_pagerank`].
#[derive(Debug, Clone, Copy)]
pub struct SamplingConfig {
    /// Probability of following a link rather than teleporting.
    pub damping: f64,
    /// Number of surfer steps to record.
    pub samples: usize,
    /// Seed for the walk's random source.
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            seed: DEFAULT_SEED,
        }
    }
}

/// Estimate PageRank by making a surfer take `config.samples` steps and
/// counting how often each page is visited.
///
/// The first page is drawn uniformly; every later step draws from the
/// transition model of the page before it. Counts are divided by the step
/// total, so the result is indexed by page id and sums to 1. Runs with the
/// same corpus and config produce identical results.
pub fn sample_pagerank(corpus: &Corpus, config: &SamplingConfig) -> Result<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    sample_pagerank_with_rng(corpus, config, &mut rng)
}

/// [`sample_pagerank`] with a caller-supplied random source.
pub fn sample_pagerank_with_rng<R: Rng>(
    corpus: &Corpus,
    config: &SamplingConfig,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if corpus.is_empty() {
        return Err(SurfrankError::EmptyCorpus);
    }
    if config.samples == 0 {
        return Err(SurfrankError::InvalidSamples);
    }
    if !(0.0..=1.0).contains(&config.damping) {
        return Err(SurfrankError::InvalidDamping(config.damping));
    }

    let n = corpus.page_count();
    let mut visits = vec![0u64; n];

    let mut current = rng.random_range(0..n);
    visits[current] += 1;

    for _ in 1..config.samples {
        let weights = transition_model(corpus, current, config.damping)?;
        current = weighted_step(&weights, rng);
        visits[current] += 1;
    }

    debug!(samples = config.samples, pages = n, "sampling walk finished");

    Ok(visits
        .iter()
        .map(|&count| count as f64 / config.samples as f64)
        .collect())
}

/// Draw an index from `weights`, which must sum to 1.
///
/// Scans the cumulative mass until it covers the drawn value. Floating-point
/// shortfall lands on the last index.
fn weighted_step<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let mut remaining: f64 = rng.random();
    for (page, &weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0.0 {
            return page;
        }
    }
    weights.len() - 1
}
