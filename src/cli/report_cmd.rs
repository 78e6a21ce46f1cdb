use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{OutputFormat, OutputOptions};
use crate::cli::renderer;
use crate::core::models::report::{LargestEntry, ReportSummary};
use crate::core::{aggregate, chart, log, render};

/// Run the full report pipeline: load, aggregate, select, chart, encode, write.
///
/// Nothing is written on failure; the output file only appears once every
/// earlier stage has succeeded.
pub fn run(csv: &Path, output: &Path, opts: &OutputOptions) -> Result<()> {
    let records = log::load_log(csv)
        .with_context(|| format!("Failed to load token log {}", csv.display()))?;
    let rows_parsed = records.len();
    if opts.verbose {
        eprintln!("Parsed {} rows from {}", rows_parsed, csv.display());
    }

    let ranked = aggregate::aggregate(records);
    let top = aggregate::select_top(ranked, aggregate::TOP_LIMIT);
    if opts.verbose {
        eprintln!("Charting {} of {} rows", top.len(), rows_parsed);
    }

    let svg = chart::render_svg(&top);
    let png = render::rasterize(&svg).context("Failed to render chart")?;
    let encoded = render::encode_base64(&png);
    let html = render::build_html(&encoded);

    std::fs::write(output, &html)
        .with_context(|| format!("Failed to write report {}", output.display()))?;

    let summary = ReportSummary {
        output: output.display().to_string(),
        rows_parsed,
        rows_charted: top.len(),
        largest: top.first().map(|r| LargestEntry {
            model: r.model.clone(),
            total_tokens: r.total_tokens,
        }),
        png_bytes: png.len(),
        html_bytes: html.len(),
    };

    match opts.format {
        OutputFormat::Text => {
            println!("{}", renderer::render_summary(&summary, opts.use_color));
        }
        OutputFormat::Json => {
            let json = if opts.pretty {
                serde_json::to_string_pretty(&summary)?
            } else {
                serde_json::to_string(&summary)?
            };
            println!("{}", json);
        }
    }

    Ok(())
}
