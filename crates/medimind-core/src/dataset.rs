//! The read-only disease dataset handle.
//!
//! A [`Dataset`] is built once at startup and shared by reference with every
//! component that needs records or the symptom vocabulary. Nothing re-reads
//! storage after construction.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::indexer::all_symptoms;
use crate::matcher::{find, find_first};
use crate::types::{DiseaseRecord, MatchResult};

/// In-memory disease records plus their derived symptom vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<DiseaseRecord>,
    vocabulary: Vec<String>,
}

impl Dataset {
    /// Build a dataset from rows already in memory.
    pub fn from_records(records: Vec<DiseaseRecord>) -> Self {
        let vocabulary = all_symptoms(&records);
        Self {
            records,
            vocabulary,
        }
    }

    /// Load records from a CSV file with a header row.
    ///
    /// A missing file yields an empty dataset. Any reader error, including a
    /// row that lacks one of the expected columns, fails the whole load.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "Dataset file not found, continuing with no records");
            return Ok(Self::default());
        }

        let file = std::fs::File::open(path)?;
        let dataset = Self::from_csv_reader(file)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            symptoms = dataset.vocabulary.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse records from CSV text. Same rules as [`Dataset::load`].
    pub fn from_csv_reader<R: std::io::Read>(rdr: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(rdr);
        let records = reader
            .deserialize::<DiseaseRecord>()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
        debug!(records = records.len(), "Dataset parsed from reader");
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    /// The sorted symptom vocabulary.
    pub fn symptoms(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records whose Symptoms field contains `query`, ignoring case.
    pub fn find(&self, query: &str) -> Vec<MatchResult> {
        find(query, &self.records)
    }

    pub fn find_first(&self, query: &str) -> Option<MatchResult> {
        find_first(query, &self.records)
    }
}
