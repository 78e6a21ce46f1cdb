/// Returns "1.2K" / "3.4M" style counts; values under 1000 keep their digits.
pub fn format_tokens(count: f64) -> String {
    if count >= 1_000_000.0 {
        format!("{:.1}M", count / 1_000_000.0)
    } else if count >= 1_000.0 {
        format!("{:.1}K", count / 1_000.0)
    } else if count == count.trunc() {
        format!("{}", count as i64)
    } else {
        format!("{:.1}", count)
    }
}

/// Returns "532 B" / "12.3 KB" / "4.5 MB".
pub fn format_bytes(bytes: usize) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.1} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{} B", bytes)
    }
}
