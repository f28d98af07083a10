//! Output formatters

pub mod csv;
pub mod json;
pub mod terminal;

use surfrank_core::{Corpus, Iterated, SamplingConfig};

use crate::app::OutputFormat;

/// One page's pair of rank estimates.
pub struct RankEntry {
    pub page: String,
    pub sampled: f64,
    pub iterated: f64,
}

/// Both estimators' results, ordered by page name.
pub struct RankReport {
    pub entries: Vec<RankEntry>,
    pub samples: usize,
    pub seed: u64,
    pub iterations: usize,
    pub delta: f64,
}

impl RankReport {
    pub fn new(
        corpus: &Corpus,
        sampled: &[f64],
        iterated: &Iterated,
        sampling: &SamplingConfig,
    ) -> Self {
        let entries = corpus
            .names()
            .enumerate()
            .map(|(id, page)| RankEntry {
                page: page.to_string(),
                sampled: sampled[id],
                iterated: iterated.scores[id],
            })
            .collect();

        Self {
            entries,
            samples: sampling.samples,
            seed: sampling.seed,
            iterations: iterated.iterations,
            delta: iterated.delta,
        }
    }
}

/// Format a rank report
pub fn format_report(report: &RankReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Csv => csv::format_report(report),
        OutputFormat::Cli => terminal::format_report(report),
    }
}
