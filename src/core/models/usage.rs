use serde::{Deserialize, Serialize};

/// One row of the token log: a model name and its prompt/completion counts.
///
/// Columns are positional in the log file; counts may be integers or floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub model: String,
    pub prompt_tokens: f64,
    pub completion_tokens: f64,
}

/// A `TokenRecord` with its derived total, ready for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    pub model: String,
    pub prompt_tokens: f64,
    pub completion_tokens: f64,
    pub total_tokens: f64,
}

impl From<TokenRecord> for AggregatedRecord {
    fn from(record: TokenRecord) -> Self {
        let total_tokens = record.prompt_tokens + record.completion_tokens;
        Self {
            model: record.model,
            prompt_tokens: record.prompt_tokens,
            completion_tokens: record.completion_tokens,
            total_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregated_record_derives_total() {
        let record = TokenRecord {
            model: "gpt-4".to_string(),
            prompt_tokens: 100.0,
            completion_tokens: 50.0,
        };
        let aggregated = AggregatedRecord::from(record);
        assert_eq!(aggregated.total_tokens, 150.0);
        assert_eq!(aggregated.model, "gpt-4");
        assert_eq!(aggregated.prompt_tokens, 100.0);
        assert_eq!(aggregated.completion_tokens, 50.0);
    }
}
