//! Surfrank CLI
//!
//! PageRank estimation for a directory of HTML pages.

use anyhow::{Context, Result};
use clap::Parser;
use surfrank_core::error::exit_codes;
use surfrank_core::{
    crawl_corpus, iterate_pagerank, sample_pagerank, IterationConfig, SamplingConfig,
    SurfrankError,
};

mod app;
mod output;

use app::Cli;
use output::RankReport;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: &Cli) -> Result<()> {
    let corpus = crawl_corpus(&cli.corpus)
        .with_context(|| format!("failed to load corpus from {}", cli.corpus.display()))?;
    tracing::debug!(pages = corpus.page_count(), "corpus loaded");

    let sampling = SamplingConfig {
        damping: cli.damping,
        samples: cli.samples,
        seed: cli.seed,
    };
    let sampled = sample_pagerank(&corpus, &sampling)?;

    let iteration = IterationConfig {
        damping: cli.damping,
        tolerance: cli.tolerance,
        max_iterations: cli.max_iterations,
    };
    let iterated = iterate_pagerank(&corpus, &iteration)?;

    let report = RankReport::new(&corpus, &sampled, &iterated, &sampling);
    print!("{}", output::format_report(&report, cli.format));

    Ok(())
}

/// Map the error chain to a process exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SurfrankError>()
        .map(SurfrankError::exit_code)
        .unwrap_or(exit_codes::GENERAL_ERROR)
}
