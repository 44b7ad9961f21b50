//! Fee data encoding.
//!
//! Packs an oracle quote and the transferred token amount into the fixed layout decoded by the
//! dynamic fee handler contract:
//!
//! | offset | size | field                                |
//! |--------|------|--------------------------------------|
//! | 0      | 32   | base effective rate (fixed point)    |
//! | 32     | 32   | token effective rate (fixed point)   |
//! | 64     | 32   | destination gas price                |
//! | 96     | 32   | expiration timestamp                 |
//! | 128    | 32   | from domain id                       |
//! | 160    | 32   | to domain id                         |
//! | 192    | 32   | resource id                          |
//! | 224    | 32   | message gas limit                    |
//! | 256    | 65   | oracle signature                     |
//! | 321    | 32   | token amount                         |
//!
//! The contract recomputes the signed digest from these bytes, so the layout must never change
//! without a matching contract upgrade.

mod decimal;

use crate::{
    constants::{
        DEFAULT_RATE_DECIMALS, FEE_DATA_HEADER_WORDS, FEE_DATA_LEN, SIGNATURE_LEN, WORD_SIZE,
    },
    error::EncodingError,
    types::FeeOracleQuote,
};
use alloy::primitives::{Bytes, U256, hex};
use decimal::{parse_fixed_point, parse_integer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fee data passed to the fee handler contract.
///
/// Displays and serializes as a `0x` prefixed hex string. Deserializing rejects payloads that
/// are not exactly 353 bytes long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Bytes", try_from = "Bytes")]
pub struct EncodedFeeData(Bytes);

impl EncodedFeeData {
    /// Returns the raw payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the payload into [`Bytes`].
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the oracle signature embedded in the payload.
    pub fn signature(&self) -> &[u8] {
        let start = FEE_DATA_HEADER_WORDS * WORD_SIZE;
        self.0.get(start..start + SIGNATURE_LEN).unwrap_or_default()
    }

    /// Returns the token amount in the trailing word.
    pub fn token_amount(&self) -> Option<U256> {
        let tail = self.0.len().checked_sub(WORD_SIZE)?;
        U256::try_from_be_slice(&self.0[tail..])
    }
}

impl AsRef<[u8]> for EncodedFeeData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<EncodedFeeData> for Bytes {
    fn from(data: EncodedFeeData) -> Self {
        data.0
    }
}

impl TryFrom<Bytes> for EncodedFeeData {
    type Error = EncodingError;

    fn try_from(bytes: Bytes) -> Result<Self, Self::Error> {
        if bytes.len() != FEE_DATA_LEN {
            return Err(EncodingError::FeeDataLength(bytes.len()));
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for EncodedFeeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Encodes [`FeeOracleQuote`]s into [`EncodedFeeData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeDataEncoder {
    /// Fixed-point scale of the effective rates.
    rate_decimals: u8,
}

impl Default for FeeDataEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_DECIMALS)
    }
}

impl FeeDataEncoder {
    /// Creates an encoder scaling effective rates by `10^rate_decimals`.
    pub const fn new(rate_decimals: u8) -> Self {
        Self { rate_decimals }
    }

    /// Returns the fixed-point scale of the effective rates.
    pub const fn rate_decimals(&self) -> u8 {
        self.rate_decimals
    }

    /// Packs the quote and the base 10 `token_amount`.
    pub fn encode(
        &self,
        quote: &FeeOracleQuote,
        token_amount: &str,
    ) -> Result<EncodedFeeData, EncodingError> {
        let base_rate = self.rate("baseEffectiveRate", &quote.base_effective_rate)?;
        let token_rate = self.rate("tokenEffectiveRate", &quote.token_effective_rate)?;
        let dst_gas_price = integer("dstGasPrice", &quote.dst_gas_price)?;
        let msg_gas_limit = integer("msgGasLimit", &quote.msg_gas_limit)?;
        let token_amount = integer("tokenAmount", token_amount)?;
        let signature = decode_signature(&quote.signature)?;

        let mut buf = Vec::with_capacity(FEE_DATA_LEN);
        buf.extend_from_slice(&base_rate.to_be_bytes::<32>());
        buf.extend_from_slice(&token_rate.to_be_bytes::<32>());
        buf.extend_from_slice(&dst_gas_price.to_be_bytes::<32>());
        buf.extend_from_slice(&U256::from(quote.expiration_timestamp).to_be_bytes::<32>());
        buf.extend_from_slice(&U256::from(quote.from_domain_id).to_be_bytes::<32>());
        buf.extend_from_slice(&U256::from(quote.to_domain_id).to_be_bytes::<32>());
        buf.extend_from_slice(quote.resource_id.as_slice());
        buf.extend_from_slice(&msg_gas_limit.to_be_bytes::<32>());
        buf.extend_from_slice(&signature);
        buf.extend_from_slice(&token_amount.to_be_bytes::<32>());
        debug_assert_eq!(buf.len(), FEE_DATA_LEN);

        Ok(EncodedFeeData(buf.into()))
    }

    fn rate(&self, field: &'static str, value: &str) -> Result<U256, EncodingError> {
        parse_fixed_point(value, self.rate_decimals)
            .ok_or_else(|| EncodingError::InvalidDecimal { field, value: value.to_string() })
    }
}

/// Packs the quote and `token_amount` using the default 18 decimal rate scale.
pub fn encode_fee_data(
    quote: &FeeOracleQuote,
    token_amount: &str,
) -> Result<EncodedFeeData, EncodingError> {
    FeeDataEncoder::default().encode(quote, token_amount)
}

fn integer(field: &'static str, value: &str) -> Result<U256, EncodingError> {
    parse_integer(value)
        .ok_or_else(|| EncodingError::InvalidInteger { field, value: value.to_string() })
}

fn decode_signature(signature: &str) -> Result<Vec<u8>, EncodingError> {
    let bytes = hex::decode(signature.trim())
        .map_err(|err| EncodingError::InvalidSignature(err.to_string()))?;
    if bytes.len() != SIGNATURE_LEN {
        return Err(EncodingError::SignatureLength(bytes.len()));
    }
    Ok(bytes)
}
