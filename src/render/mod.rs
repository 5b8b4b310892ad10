//! Plain-text table rendering of a summary.

use crate::model::Summary;

const SEPARATOR: &str = "-------------------------------";

/// Render the summary table exactly as it goes to stdout.
///
/// Header, 31-dash separator, one `rate%\tduration ms\tdescription` row per
/// shown entry, separator again, then the total in seconds. Two decimals
/// everywhere. An empty summary renders the same frame with zero rows.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();

    out.push_str("Rate\tTime\tMethod Name\n");
    out.push_str(SEPARATOR);
    out.push('\n');

    for entry in &summary.shown {
        out.push_str(&format!(
            "{:.2}%\t{:.2}ms\t{}\n",
            entry.rate, entry.duration_ms, entry.description
        ));
    }

    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!("Total Time: {:.2}s\n", summary.total_ms / 1000.0));

    out
}
