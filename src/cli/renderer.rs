use colored::{control, Colorize};

use crate::core::formatter::{format_bytes, format_tokens};
use crate::core::models::report::ReportSummary;

/// Render the post-write run summary as a colored (or plain) block.
///
/// Layout:
/// ```text
///  Report written to report.html
///   Rows      42 parsed
///   Charted   20 models
///   Largest   gpt-4 (1.2M tokens)
///   Image     34.5 KB PNG
/// ```
pub fn render_summary(summary: &ReportSummary, use_color: bool) -> String {
    control::set_override(use_color);

    let mut lines: Vec<String> = Vec::new();

    lines.push(
        format!(" Report written to {}", summary.output)
            .bold()
            .to_string(),
    );
    lines.push(format!(
        "  {}      {} parsed",
        "Rows".cyan(),
        summary.rows_parsed
    ));
    lines.push(format!(
        "  {}   {} models",
        "Charted".cyan(),
        summary.rows_charted
    ));

    if let Some(largest) = &summary.largest {
        lines.push(format!(
            "  {}   {} ({} tokens)",
            "Largest".cyan(),
            largest.model,
            format_tokens(largest.total_tokens)
        ));
    }

    lines.push(format!(
        "  {}     {} PNG",
        "Image".cyan(),
        format_bytes(summary.png_bytes)
    ));

    lines.join("\n")
}
