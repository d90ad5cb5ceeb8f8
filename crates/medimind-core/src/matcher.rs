//! Substring matcher over the raw Symptoms field.

use crate::types::{DiseaseRecord, MatchResult};

/// Whether `record` matches `query_lower`, which must already be lowercase.
fn matches(record: &DiseaseRecord, query_lower: &str) -> bool {
    record.symptoms.to_lowercase().contains(query_lower)
}

/// Find every record whose Symptoms field contains `query`, ignoring case.
///
/// This is a substring test, not a token match: `"ache"` matches
/// `"headache"`. Results keep the source order. The empty query matches
/// every record.
pub fn find(query: &str, records: &[DiseaseRecord]) -> Vec<MatchResult> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &query_lower))
        .map(MatchResult::from)
        .collect()
}

/// The first matching record, if any.
pub fn find_first(query: &str, records: &[DiseaseRecord]) -> Option<MatchResult> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .find(|record| matches(record, &query_lower))
        .map(MatchResult::from)
}
