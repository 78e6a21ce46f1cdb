use serde::Serialize;

/// Summary of one generator run, printed after the report file is written.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub output: String,
    pub rows_parsed: usize,
    pub rows_charted: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest: Option<LargestEntry>,
    pub png_bytes: usize,
    pub html_bytes: usize,
}

/// The top-ranked model of the run.
#[derive(Debug, Clone, Serialize)]
pub struct LargestEntry {
    pub model: String,
    pub total_tokens: f64,
}
