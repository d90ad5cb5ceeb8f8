//! Outcome of the "Analyze Condition" search widget.

use crate::dataset::Dataset;
use crate::types::MatchResult;

/// Placeholder option shown first in the symptom selector.
pub const SYMPTOM_SENTINEL: &str = "Select a symptom...";

/// What the search widget shows for a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The sentinel (or nothing) was selected.
    NoSymptomSelected,
    /// A valid symptom with no matching record.
    NotFound,
    Found(Vec<MatchResult>),
}

impl SearchOutcome {
    /// The user-facing status line.
    pub fn message(&self) -> String {
        match self {
            SearchOutcome::NoSymptomSelected => "Please select a valid symptom first.".to_string(),
            SearchOutcome::NotFound => "No disease found in our current database.".to_string(),
            SearchOutcome::Found(matches) => {
                format!("Analysis complete. Found {} match(es).", matches.len())
            }
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            SearchOutcome::NoSymptomSelected => "no_symptom_selected",
            SearchOutcome::NotFound => "not_found",
            SearchOutcome::Found(_) => "found",
        }
    }

    pub fn matches(&self) -> &[MatchResult] {
        match self {
            SearchOutcome::Found(matches) => matches,
            _ => &[],
        }
    }
}

/// Run the search widget for `selection`.
pub fn analyze_condition(selection: &str, dataset: &Dataset) -> SearchOutcome {
    if selection.trim().is_empty() || selection == SYMPTOM_SENTINEL {
        return SearchOutcome::NoSymptomSelected;
    }

    let matches = dataset.find(selection);
    tracing::debug!(selection, matches = matches.len(), "Analyzed condition");
    if matches.is_empty() {
        SearchOutcome::NotFound
    } else {
        SearchOutcome::Found(matches)
    }
}
