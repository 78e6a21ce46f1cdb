//! Chart rasterization and report assembly.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::core::chart::{CANVAS_HEIGHT, CANVAS_WIDTH, CHART_TITLE};

/// Rasterize the chart SVG into PNG bytes.
pub fn rasterize(svg: &str) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_data(svg.as_bytes(), &options)
        .context("Failed to parse chart SVG")?;

    let mut pixmap = tiny_skia::Pixmap::new(CANVAS_WIDTH, CANVAS_HEIGHT)
        .context("Failed to allocate pixel buffer")?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, CANVAS_WIDTH, CANVAS_HEIGHT);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder
        .write_header()
        .context("Failed to write PNG header")?
        .write_image_data(pixmap.data())
        .context("Failed to encode PNG")?;

    Ok(out)
}

/// Standard base64 with no line wrapping, as the data URI expects.
pub fn encode_base64(png: &[u8]) -> String {
    STANDARD.encode(png)
}

/// The fixed report document. Model names never appear as raw HTML text, so
/// no escaping is applied.
pub fn build_html(encoded_png: &str) -> String {
    format!(
        "<html><body><h1>{CHART_TITLE}</h1><img src='data:image/png;base64,{encoded_png}'/></body></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chart;
    use crate::core::models::usage::AggregatedRecord;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn rasterize_produces_png_bytes() {
        let svg = chart::render_svg(&[AggregatedRecord {
            model: "gpt-4".to_string(),
            prompt_tokens: 100.0,
            completion_tokens: 50.0,
            total_tokens: 150.0,
        }]);
        let png = rasterize(&svg).unwrap();
        assert!(png.len() > 8);
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn rasterize_handles_empty_chart() {
        let svg = chart::render_svg(&[]);
        let png = rasterize(&svg).unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn rasterize_rejects_malformed_svg() {
        assert!(rasterize("<svg").is_err());
    }

    #[test]
    fn encode_base64_is_standard_alphabet() {
        assert_eq!(encode_base64(b"hello"), "aGVsbG8=");
        // '+' and '/' (not '-' and '_') mark the standard alphabet
        assert_eq!(encode_base64(&[0xfb, 0xff]), "+/8=");
    }

    #[test]
    fn encode_base64_never_wraps() {
        let long = vec![0u8; 4096];
        assert!(!encode_base64(&long).contains('\n'));
    }

    #[test]
    fn html_matches_fixed_template() {
        let html = build_html("QUJD");
        assert_eq!(
            html,
            "<html><body><h1>Top 20 Largest Prompts</h1><img src='data:image/png;base64,QUJD'/></body></html>"
        );
    }
}
