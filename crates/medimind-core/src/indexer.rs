//! Symptom vocabulary derivation.

use std::collections::BTreeSet;

use crate::types::DiseaseRecord;

/// Split a raw Symptoms field into normalized keyword tokens.
///
/// Commas count as whitespace; tokens are lowercased and trimmed. The
/// ASCII information separators U+001C..=U+001F also split, although
/// `char::is_whitespace` excludes them.
pub fn tokenize(symptoms: &str) -> impl Iterator<Item = String> + '_ {
    symptoms
        .split(is_separator)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Every distinct symptom keyword across `records`, sorted and lowercase.
pub fn all_symptoms(records: &[DiseaseRecord]) -> Vec<String> {
    let set: BTreeSet<String> = records
        .iter()
        .flat_map(|record| tokenize(&record.symptoms))
        .collect();
    set.into_iter().collect()
}
