use thiserror::Error;

/// Failures that abort an analysis run.
///
/// Degenerate data (empty input, zero targets, no under-performers) is never
/// an error; only a malformed dataset or an unusable configuration is.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("input is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("invalid configuration for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
