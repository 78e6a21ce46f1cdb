use std::cmp::Ordering;

use crate::core::models::usage::{AggregatedRecord, TokenRecord};

/// Maximum number of rows the report charts.
pub const TOP_LIMIT: usize = 20;

/// Derive the total token count for every record, preserving input order.
pub fn aggregate(records: Vec<TokenRecord>) -> Vec<AggregatedRecord> {
    records.into_iter().map(AggregatedRecord::from).collect()
}

/// Sort descending by total and keep the first `limit` rows.
///
/// The sort is stable, so ties keep their original relative order.
pub fn select_top(
    mut records: Vec<AggregatedRecord>,
    limit: usize,
) -> Vec<AggregatedRecord> {
    records.sort_by(|a, b| {
        b.total_tokens
            .partial_cmp(&a.total_tokens)
            .unwrap_or(Ordering::Equal)
    });
    records.truncate(limit);
    records
}
