//! CSV output formatter

use super::RankReport;

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::from("page,sampling,iteration\n");

    for entry in &report.entries {
        let escaped_page = escape_csv(&entry.page);
        output.push_str(&format!(
            "{},{},{}\n",
            escaped_page, entry.sampled, entry.iterated
        ));
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
