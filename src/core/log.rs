use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::core::models::usage::TokenRecord;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to read token log: {0}")]
    Read(#[from] std::io::Error),
    #[error("Line {line}: expected 3 fields (model, prompt_tokens, completion_tokens), found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("Line {line}: invalid token count '{value}'")]
    InvalidCount { line: usize, value: String },
}

/// Load every row of a headerless `model,prompt_tokens,completion_tokens` CSV.
///
/// Columns are positional. A header line, if present, is parsed as data and
/// fails numeric conversion rather than being skipped. Blank lines are
/// ignored. Model names are preserved byte-for-byte.
pub fn load_log(path: &Path) -> Result<Vec<TokenRecord>, LogError> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut records: Vec<TokenRecord> = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        records.push(parse_row(&line, index + 1)?);
    }
    Ok(records)
}

fn parse_row(line: &str, line_no: usize) -> Result<TokenRecord, LogError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(LogError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }
    Ok(TokenRecord {
        model: fields[0].to_string(),
        prompt_tokens: parse_count(fields[1], line_no)?,
        completion_tokens: parse_count(fields[2], line_no)?,
    })
}

fn parse_count(field: &str, line_no: usize) -> Result<f64, LogError> {
    field.trim().parse::<f64>().map_err(|_| LogError::InvalidCount {
        line: line_no,
        value: field.to_string(),
    })
}
