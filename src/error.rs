use thiserror::Error;

/// Errors from the outer surfaces of the calculator: scenario files and
/// command-line arguments. The calculation itself never fails.
#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("failed to read scenario file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid start month '{0}', expected YYYY-MM")]
    InvalidStartMonth(String),
}
