pub mod config;
pub mod dataset;
pub mod error;
pub mod indexer;
pub mod matcher;
pub mod search;
pub mod types;

pub use config::MedimindConfig;
pub use dataset::Dataset;
pub use error::{MedimindError, Result};
pub use indexer::all_symptoms;
pub use matcher::find;
pub use search::{analyze_condition, SearchOutcome, SYMPTOM_SENTINEL};
pub use types::*;
