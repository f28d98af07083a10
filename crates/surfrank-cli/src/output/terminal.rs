//! Terminal output formatter

use super::RankReport;

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "PageRank Results from Sampling (n = {})\n",
        report.samples
    ));
    for entry in &report.entries {
        output.push_str(&format!("  {}: {:.4}\n", entry.page, entry.sampled));
    }

    output.push_str("PageRank Results from Iteration\n");
    for entry in &report.entries {
        output.push_str(&format!("  {}: {:.4}\n", entry.page, entry.iterated));
    }

    output
}
