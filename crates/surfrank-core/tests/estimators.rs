//! Cross-estimator properties over small corpora

use proptest::prelude::*;
use surfrank_core::{
    iterate_pagerank, sample_pagerank, transition_model, Corpus, CorpusBuilder, IterationConfig,
    SamplingConfig,
};

fn corpus(pages: &[(&str, &[&str])]) -> Corpus {
    let mut builder = CorpusBuilder::new();
    for (name, targets) in pages {
        builder.add_page(*name, targets.iter().copied());
    }
    builder.build()
}

fn assert_distribution(scores: &[f64]) {
    let sum: f64 = scores.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9, "scores sum to {sum}");
    assert!(scores.iter().all(|&score| score >= 0.0));
}

#[test]
fn test_mutual_pair_agrees_on_even_split() {
    let corpus = corpus(&[("a.html", &["b.html"]), ("b.html", &["a.html"])]);

    let sampled = sample_pagerank(&corpus, &SamplingConfig::default()).unwrap();
    let iterated = iterate_pagerank(&corpus, &IterationConfig::default()).unwrap();

    assert_distribution(&sampled);
    assert_distribution(&iterated.scores);
    assert!((sampled[0] - 0.5).abs() < 0.05);
    assert!((iterated.scores[0] - 0.5).abs() < 1e-6);
}

#[test]
fn test_iterated_ranks_satisfy_the_recurrence() {
    let corpus = corpus(&[
        ("a.html", &["b.html", "c.html"]),
        ("b.html", &["c.html"]),
        ("c.html", &["a.html"]),
    ]);
    let config = IterationConfig::default();

    let result = iterate_pagerank(&corpus, &config).unwrap();

    let n = corpus.page_count();
    let scores = &result.scores;
    for page in 0..n {
        let mut expected = (1.0 - config.damping) / n as f64;
        for source in 0..n {
            if corpus.is_dangling(source) {
                expected += config.damping * scores[source] / n as f64;
            } else if corpus.outlinks(source).contains(&page) {
                expected += config.damping * scores[source] / corpus.out_degree(source) as f64;
            }
        }
        assert!(
            (scores[page] - expected).abs() < config.tolerance,
            "page {page} is {} away from its recurrence value",
            (scores[page] - expected).abs()
        );
    }
}

#[test]
fn test_estimators_agree_statistically() {
    let corpus = corpus(&[
        ("a.html", &["b.html", "c.html"]),
        ("b.html", &["c.html"]),
        ("c.html", &["a.html"]),
        ("d.html", &["c.html"]),
    ]);

    let sampled = sample_pagerank(&corpus, &SamplingConfig::default()).unwrap();
    let iterated = iterate_pagerank(&corpus, &IterationConfig::default()).unwrap();

    for (sample, iterate) in sampled.iter().zip(iterated.scores.iter()) {
        assert!(
            (sample - iterate).abs() < 0.05,
            "estimators disagree: {sample} vs {iterate}"
        );
    }
}

#[test]
fn test_different_seeds_stay_statistically_close() {
    let corpus = corpus(&[
        ("a.html", &["b.html"]),
        ("b.html", &["c.html"]),
        ("c.html", &["a.html", "b.html"]),
    ]);

    let first = sample_pagerank(
        &corpus,
        &SamplingConfig {
            seed: 1,
            ..Default::default()
        },
    )
    .unwrap();
    let second = sample_pagerank(
        &corpus,
        &SamplingConfig {
            seed: 2,
            ..Default::default()
        },
    )
    .unwrap();

    for (a, b) in first.iter().zip(second.iter()) {
        assert!((a - b).abs() < 0.05);
    }
}

#[test]
fn test_single_page_corpus() {
    let corpus = corpus(&[("only.html", &[])]);

    let sampled = sample_pagerank(&corpus, &SamplingConfig::default()).unwrap();
    let iterated = iterate_pagerank(&corpus, &IterationConfig::default()).unwrap();

    assert_eq!(sampled, vec![1.0]);
    assert!((iterated.scores[0] - 1.0).abs() < 1e-9);
}

#[test]
fn test_dangling_mass_stays_in_the_distribution() {
    let corpus = corpus(&[
        ("a.html", &["b.html"]),
        ("b.html", &[]),
        ("c.html", &["a.html"]),
    ]);

    let sampled = sample_pagerank(&corpus, &SamplingConfig::default()).unwrap();
    let iterated = iterate_pagerank(&corpus, &IterationConfig::default()).unwrap();

    assert_distribution(&sampled);
    assert_distribution(&iterated.scores);
}

proptest! {
    // Property: on arbitrary small corpora both estimators produce proper
    // distributions and every transition row is itself a distribution.
    #[test]
    fn prop_estimates_are_distributions(
        n in 1usize..8,
        adj in prop::collection::vec(prop::collection::vec(0usize..8, 0..8), 1..8),
        seed in any::<u64>(),
    ) {
        let mut builder = CorpusBuilder::new();
        for page in 0..n {
            let targets: Vec<String> = adj
                .get(page)
                .map(|targets| {
                    targets
                        .iter()
                        .map(|target| format!("p{}.html", target % n))
                        .collect()
                })
                .unwrap_or_default();
            builder.add_page(format!("p{page}.html"), targets);
        }
        let corpus = builder.build();
        prop_assert_eq!(corpus.page_count(), n);

        for page in 0..n {
            let outlinks = corpus.outlinks(page);
            prop_assert!(outlinks.iter().all(|&target| target < n && target != page));

            let weights = transition_model(&corpus, page, 0.85).unwrap();
            let sum: f64 = weights.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            prop_assert!(weights.iter().all(|&weight| weight >= 0.0));
        }

        let config = SamplingConfig { samples: 500, seed, ..Default::default() };
        let sampled = sample_pagerank(&corpus, &config).unwrap();
        let sum: f64 = sampled.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
        prop_assert!(sampled.iter().all(|&score| score >= 0.0));

        let iterated = iterate_pagerank(&corpus, &IterationConfig::default()).unwrap();
        let sum: f64 = iterated.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
        prop_assert!(iterated.scores.iter().all(|&score| score >= 0.0));
    }
}
