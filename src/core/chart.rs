//! Horizontal bar chart of total tokens per model, emitted as SVG markup.

use std::fmt::Write as _;

use crate::core::formatter::format_tokens;
use crate::core::models::usage::AggregatedRecord;

// Canvas matches the 10x6 figure at 100 px per unit.
pub const CANVAS_WIDTH: u32 = 1000;
pub const CANVAS_HEIGHT: u32 = 600;

pub const CHART_TITLE: &str = "Top 20 Largest Prompts";
pub const X_AXIS_LABEL: &str = "Total Tokens";

// Layout constants
const MARGIN_LEFT: f64 = 220.0; // room for model labels
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 60.0; // room for the title
const MARGIN_BOTTOM: f64 = 70.0; // room for ticks and the x-axis label
const BAR_BAND_FILL: f64 = 0.8; // bar height as a share of its band

const BAR_FILL: &str = "#1f77b4";
const AXIS_STROKE: &str = "#333333";
const TEXT_FILL: &str = "#111111";
const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";

/// Render the selection as a horizontal bar chart, largest total at the top.
///
/// An empty selection still renders the title, axes, and labels.
pub fn render_svg(records: &[AggregatedRecord]) -> String {
    let plot_w = CANVAS_WIDTH as f64 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CANVAS_HEIGHT as f64 - MARGIN_TOP - MARGIN_BOTTOM;
    let plot_bottom = MARGIN_TOP + plot_h;

    let max_total = records
        .iter()
        .map(|r| r.total_tokens)
        .fold(0.0_f64, f64::max);
    // Degenerate inputs (no rows, all-zero totals) still need a finite scale.
    let scale_max = if max_total > 0.0 { max_total } else { 1.0 };

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{CANVAS_WIDTH}' height='{CANVAS_HEIGHT}' viewBox='0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}'>"
    );
    let _ = writeln!(
        svg,
        "  <rect width='{CANVAS_WIDTH}' height='{CANVAS_HEIGHT}' fill='white'/>"
    );

    // Title
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='38' text-anchor='middle' font-family='{FONT_FAMILY}' font-size='20' fill='{TEXT_FILL}'>{}</text>",
        MARGIN_LEFT + plot_w / 2.0,
        escape_text(CHART_TITLE),
    );

    // X ticks and tick labels
    let step = tick_step(scale_max);
    let tick_count = (scale_max / step).floor() as usize;
    for i in 0..=tick_count {
        let value = step * i as f64;
        let x = MARGIN_LEFT + (value / scale_max) * plot_w;
        let _ = writeln!(
            svg,
            "  <line x1='{x:.1}' y1='{plot_bottom:.1}' x2='{x:.1}' y2='{:.1}' stroke='{AXIS_STROKE}' stroke-width='1'/>",
            plot_bottom + 5.0,
        );
        let _ = writeln!(
            svg,
            "  <text x='{x:.1}' y='{:.1}' text-anchor='middle' font-family='{FONT_FAMILY}' font-size='12' fill='{AXIS_STROKE}'>{}</text>",
            plot_bottom + 20.0,
            escape_text(&format_tokens(value)),
        );
    }

    // Bars, largest at the top
    if !records.is_empty() {
        let band = plot_h / records.len() as f64;
        let bar_h = band * BAR_BAND_FILL;
        for (index, record) in records.iter().enumerate() {
            let y = MARGIN_TOP + index as f64 * band + (band - bar_h) / 2.0;
            let width = (record.total_tokens / scale_max) * plot_w;
            let _ = writeln!(
                svg,
                "  <rect x='{MARGIN_LEFT:.1}' y='{y:.1}' width='{width:.1}' height='{bar_h:.1}' fill='{BAR_FILL}'/>",
            );
            let _ = writeln!(
                svg,
                "  <text x='{:.1}' y='{:.1}' text-anchor='end' font-family='{FONT_FAMILY}' font-size='12' fill='{TEXT_FILL}'>{}</text>",
                MARGIN_LEFT - 8.0,
                y + bar_h / 2.0 + 4.0,
                escape_text(&record.model),
            );
        }
    }

    // Axis frame
    let _ = writeln!(
        svg,
        "  <rect x='{MARGIN_LEFT:.1}' y='{MARGIN_TOP:.1}' width='{plot_w:.1}' height='{plot_h:.1}' fill='none' stroke='{AXIS_STROKE}' stroke-width='1'/>"
    );

    // X-axis label
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='{:.1}' text-anchor='middle' font-family='{FONT_FAMILY}' font-size='14' fill='{TEXT_FILL}'>{}</text>",
        MARGIN_LEFT + plot_w / 2.0,
        CANVAS_HEIGHT as f64 - 20.0,
        escape_text(X_AXIS_LABEL),
    );

    let _ = writeln!(svg, "</svg>");
    svg
}

/// Round the tick interval to a 1/2/5 step yielding at most ~6 ticks.
fn tick_step(max: f64) -> f64 {
    let raw = max / 5.0;
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregated(model: &str, total: f64) -> AggregatedRecord {
        AggregatedRecord {
            model: model.to_string(),
            prompt_tokens: total,
            completion_tokens: 0.0,
            total_tokens: total,
        }
    }

    #[test]
    fn svg_contains_title_and_axis_label() {
        let svg = render_svg(&[aggregated("gpt-4", 150.0)]);
        assert!(svg.contains("Top 20 Largest Prompts"));
        assert!(svg.contains("Total Tokens"));
    }

    #[test]
    fn one_bar_per_record() {
        let records = vec![
            aggregated("a", 100.0),
            aggregated("b", 50.0),
            aggregated("c", 25.0),
        ];
        let svg = render_svg(&records);
        assert_eq!(svg.matches(BAR_FILL).count(), 3);
    }

    #[test]
    fn largest_record_is_drawn_first() {
        let svg = render_svg(&[aggregated("biggest", 200.0), aggregated("smaller", 10.0)]);
        let biggest = svg.find("biggest").unwrap();
        let smaller = svg.find("smaller").unwrap();
        assert!(biggest < smaller);
    }

    #[test]
    fn largest_bar_spans_the_plot_width() {
        let svg = render_svg(&[aggregated("gpt-4", 150.0)]);
        // plot width = 1000 - 220 - 40
        assert!(svg.contains("width='740.0'"));
    }

    #[test]
    fn empty_selection_renders_axes_only() {
        let svg = render_svg(&[]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Top 20 Largest Prompts"));
        assert!(!svg.contains(BAR_FILL));
    }

    #[test]
    fn model_names_are_xml_escaped() {
        let svg = render_svg(&[aggregated("a<b>&c", 10.0)]);
        assert!(svg.contains("a&lt;b&gt;&amp;c"));
        assert!(!svg.contains("a<b>&c"));
    }

    #[test]
    fn tick_step_uses_nice_intervals() {
        assert_eq!(tick_step(150.0), 50.0);
        assert_eq!(tick_step(1000.0), 200.0);
        assert_eq!(tick_step(7.0), 2.0);
        assert!((tick_step(1.0) - 0.2).abs() < 1e-12);
    }
}
