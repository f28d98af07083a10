//! PageRank estimation
//!
//! Two independent estimators over a [`Corpus`](crate::graph::Corpus): a
//! random-surfer simulation ([`sample_pagerank`]) and a fixed-point
//! iteration ([`iterate_pagerank`]). Both produce rank vectors indexed by
//! page id that sum to 1, and both treat a dangling page as if it linked to
//! every page in the corpus, itself included.

pub mod iterative;
pub mod sampling;
pub mod transition;

pub use iterative::{iterate_pagerank, Iterated, IterationConfig};
pub use sampling::{sample_pagerank, sample_pagerank_with_rng, SamplingConfig};
pub use transition::transition_model;

/// Scale `scores` so they sum to 1. All-zero input is left untouched.
pub fn normalize(scores: &mut [f64]) {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 {
        for score in scores {
            *score /= sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scales_to_unit_sum() {
        let mut scores = vec![2.0, 1.0, 1.0];
        normalize(&mut scores);

        assert_eq!(scores, vec![0.5, 0.25, 0.25]);
    }

    #[test]
    fn test_normalize_leaves_zeros_alone() {
        let mut scores = vec![0.0, 0.0];
        normalize(&mut scores);

        assert_eq!(scores, vec![0.0, 0.0]);
    }
}
