use thiserror::Error;

/// Top-level error type for MediMind.
///
/// Host-facing error types convert from it, e.g. `ApiError: From<MedimindError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MedimindError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The dataset file exists but could not be read as records.
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for MedimindError {
    fn from(err: toml::de::Error) -> Self {
        MedimindError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MedimindError {
    fn from(err: toml::ser::Error) -> Self {
        MedimindError::Config(err.to_string())
    }
}

impl From<csv::Error> for MedimindError {
    fn from(err: csv::Error) -> Self {
        MedimindError::Dataset(err.to_string())
    }
}

/// A specialized `Result` type for MediMind operations.
pub type Result<T> = std::result::Result<T, MedimindError>;
