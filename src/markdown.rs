use crate::aggregate::{ProgressReport, Stats};

/// Renders the progress report: a heading, the overall line and one table
/// row per topic in ascending topic order.
pub fn render_progress_md(report: &ProgressReport) -> String {
    let Stats { done, total, pct } = report.summary;

    let mut lines = vec![
        "# Rustlings Progress".to_string(),
        String::new(),
        format!("- **Completed:** {done} / {total} ({pct}%)"),
        String::new(),
        "## By Topic".to_string(),
        String::new(),
        "| Topic | Done | Total | % |".to_string(),
        "|---|---:|---:|---:|".to_string(),
    ];

    // BTreeMap iteration is already sorted by topic name
    for (topic, stats) in &report.topics {
        lines.push(format!(
            "| {} | {} | {} | {}% |",
            topic, stats.done, stats.total, stats.pct
        ));
    }
    lines.push(String::new());

    lines.join("\n")
}
