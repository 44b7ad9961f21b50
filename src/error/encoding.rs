use thiserror::Error;

/// Errors that can occur while packing a quote into fee data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A fixed-point field is not a non-negative decimal number.
    #[error("invalid decimal value for {field}: {value:?}")]
    InvalidDecimal {
        /// The quote field.
        field: &'static str,
        /// The raw value.
        value: String,
    },
    /// An integer field is not a non-negative integer that fits into 256 bits.
    #[error("invalid integer value for {field}: {value:?}")]
    InvalidInteger {
        /// The quote field.
        field: &'static str,
        /// The raw value.
        value: String,
    },
    /// The signature is not valid hex.
    #[error("invalid oracle signature hex: {0}")]
    InvalidSignature(String),
    /// The signature does not have the expected length.
    #[error("invalid oracle signature length: expected 65 bytes, got {0}")]
    SignatureLength(usize),
    /// Fee data does not have the fixed payload length.
    #[error("invalid fee data length: expected 353 bytes, got {0}")]
    FeeDataLength(usize),
}
