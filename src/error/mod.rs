//! Dynamic fee error types.
use thiserror::Error;

mod encoding;
pub use encoding::EncodingError;

mod oracle;
pub use oracle::OracleError;

/// The overarching error type returned by [`calculate_dynamic_fee`].
///
/// [`calculate_dynamic_fee`]: crate::fee::calculate_dynamic_fee
#[derive(Debug, Error)]
pub enum FeeError {
    /// Errors related to the fee oracle round-trip.
    #[error(transparent)]
    Oracle(#[from] OracleError),
    /// The oracle answered successfully but did not include a complete quote.
    #[error("Empty response data from fee oracle service")]
    EmptyOracleResponse,
    /// A quote field could not be packed into the fee data payload.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// The fee handler `calculateFee` call failed.
    #[error(transparent)]
    OnChainCall(#[from] alloy::contract::Error),
}
