//! Dynamic fee constants.

/// Number of fractional digits the effective rates are scaled by before packing.
///
/// Matches the minor-unit convention of the tokens served by the fee handler, ie. a rate of
/// `1.5` is packed as `1.5 * 10^18`.
pub const DEFAULT_RATE_DECIMALS: u8 = 18;

/// Width of every fixed-size field in the fee data payload.
pub const WORD_SIZE: usize = 32;

/// Length of an oracle signature: `r`, `s` and the recovery byte.
pub const SIGNATURE_LEN: usize = 65;

/// Number of 32 byte words that precede the signature in the fee data payload.
pub const FEE_DATA_HEADER_WORDS: usize = 8;

/// Total length of the encoded fee data payload.
pub const FEE_DATA_LEN: usize = FEE_DATA_HEADER_WORDS * WORD_SIZE + SIGNATURE_LEN + WORD_SIZE;

/// Message returned when the fee oracle can not be reached or answers with a non-success status.
pub const ORACLE_UNAVAILABLE_MESSAGE: &str = "Error fetching fee from fee oracle";

/// Message returned when the fee oracle answers without a usable quote.
pub const EMPTY_ORACLE_RESPONSE_MESSAGE: &str = "Empty response data from fee oracle service";
