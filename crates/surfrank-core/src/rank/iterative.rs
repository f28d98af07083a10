//! Iterative estimator: drive the rank recurrence to a fixed point

use tracing::trace;

use crate::error::{Result, SurfrankError};
use crate::graph::Corpus;
use crate::rank::normalize;
use crate::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

/// Tuning for [`iterate_pagerank`].
#[derive(Debug, Clone, Copy)]
pub struct IterationConfig {
    /// Probability of following a link rather than teleporting.
    pub damping: f64,
    /// Convergence threshold on the largest per-page change.
    pub tolerance: f64,
    /// Rounds allowed before giving up.
    pub max_iterations: usize,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// A converged rank vector plus how the iteration went.
#[derive(Debug, Clone)]
pub struct Iterated {
    /// Rank per page id; sums to 1.
    pub scores: Vec<f64>,
    /// Rounds taken to converge.
    pub iterations: usize,
    /// Largest per-page change in the final round.
    pub delta: f64,
}

/// Estimate PageRank by iterating the rank recurrence until it settles.
///
/// Every page starts at `1/N`. Each round recomputes all pages from a frozen
/// snapshot of the previous round:
///
/// ```text
/// rank'[p] = (1 - d)/N + d * (dangling_mass/N + sum over links i -> p of rank[i]/L[i])
/// ```
///
/// where `L[i]` is the outlink count of page `i` and `dangling_mass` is the
/// rank currently sitting on pages with no outlinks, which a dangling page
/// spreads over the whole corpus. The round's delta is the largest absolute
/// per-page change; iteration stops once it drops below `config.tolerance`
/// and fails with [`SurfrankError::ConvergenceFailure`] once
/// `config.max_iterations` rounds have passed without that happening.
/// The computation is deterministic for a given corpus and config.
pub fn iterate_pagerank(corpus: &Corpus, config: &IterationConfig) -> Result<Iterated> {
    if !(0.0..=1.0).contains(&config.damping) {
        return Err(SurfrankError::InvalidDamping(config.damping));
    }
    if corpus.is_empty() {
        return Err(SurfrankError::EmptyCorpus);
    }

    let n = corpus.page_count();
    iterate_from(corpus, config, vec![1.0 / n as f64; n])
}

fn iterate_from(corpus: &Corpus, config: &IterationConfig, initial: Vec<f64>) -> Result<Iterated> {
    let n = corpus.page_count();
    let n_f64 = n as f64;
    let incoming = corpus.reverse_index();
    let out_degrees: Vec<usize> = (0..n).map(|page| corpus.out_degree(page)).collect();
    let teleport = (1.0 - config.damping) / n_f64;

    let mut scores = initial;
    let mut next = vec![0.0; n];
    let mut delta = f64::MAX;

    for round in 1..=config.max_iterations {
        let dangling_mass: f64 = out_degrees
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(page, _)| scores[page])
            .sum();
        let base = teleport + config.damping * dangling_mass / n_f64;

        for page in 0..n {
            let linked: f64 = incoming[page]
                .iter()
                .map(|&source| scores[source] / out_degrees[source] as f64)
                .sum();
            next[page] = base + config.damping * linked;
        }

        delta = scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0_f64, f64::max);
        std::mem::swap(&mut scores, &mut next);
        trace!(round, delta, "rank update");

        if delta < config.tolerance {
            normalize(&mut scores);
            return Ok(Iterated {
                scores,
                iterations: round,
                delta,
            });
        }
    }

    Err(SurfrankError::ConvergenceFailure {
        iterations: config.max_iterations,
        delta,
    })
}
