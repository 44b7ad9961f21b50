use thiserror::Error;

/// Errors related to the fee oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The oracle could not be reached, answered with a non-success status or with a body that is
    /// not JSON.
    ///
    /// The underlying transport error is intentionally not carried.
    #[error("Error fetching fee from fee oracle")]
    Unavailable,
    /// The oracle answered with an explicit `error` field.
    #[error("{0}")]
    Reported(String),
}
