//! JSON output formatter

use super::RankReport;

pub fn format_report(report: &RankReport) -> String {
    let pages: Vec<serde_json::Value> = report
        .entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "page": entry.page,
                "sampling": entry.sampled,
                "iteration": entry.iterated,
            })
        })
        .collect();

    let output = serde_json::json!({
        "samples": report.samples,
        "seed": report.seed,
        "iterations": report.iterations,
        "delta": report.delta,
        "pages": pages,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
