//! Random-surfer transition model

use crate::error::{Result, SurfrankError};
use crate::graph::Corpus;

/// Probability distribution over which page a surfer visits next.
///
/// With probability `damping` the surfer follows one of `page`'s outlinks,
/// each equally likely; with probability `1 - damping` it teleports to any
/// corpus page, each equally likely. A dangling page is treated as linking
/// to every page including itself, which collapses its whole row to the
/// uniform distribution.
///
/// The returned weights are indexed by page id and sum to 1.
pub fn transition_model(corpus: &Corpus, page: usize, damping: f64) -> Result<Vec<f64>> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(SurfrankError::InvalidDamping(damping));
    }
    if corpus.is_empty() {
        return Err(SurfrankError::EmptyCorpus);
    }

    let n = corpus.page_count();
    if page >= n {
        return Err(SurfrankError::UnknownPage(page));
    }

    let links = corpus.outlinks(page);
    if links.is_empty() {
        return Ok(vec![1.0 / n as f64; n]);
    }

    let mut weights = vec![(1.0 - damping) / n as f64; n];
    let link_share = damping / links.len() as f64;
    for &target in links {
        weights[target] += link_share;
    }

    Ok(weights)
}
