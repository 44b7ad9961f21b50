//! Fee oracle quote types.

use crate::{error::FeeError, types::FeeOracleRequest};
use alloy::primitives::B256;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A signed fee quote issued by the fee oracle.
///
/// The signature covers the packed quote fields and is only verified by the fee handler contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeOracleQuote {
    /// Base (native) currency exchange rate, as a decimal string.
    pub base_effective_rate: String,
    /// Token exchange rate, as a decimal string.
    pub token_effective_rate: String,
    /// Destination chain gas price in wei, as a decimal string.
    pub dst_gas_price: String,
    /// Hex encoded oracle signature (`r || s || v`).
    pub signature: String,
    /// Source domain.
    #[serde(rename = "fromDomainID")]
    pub from_domain_id: u8,
    /// Destination domain.
    #[serde(rename = "toDomainID")]
    pub to_domain_id: u8,
    /// Resource being transferred.
    #[serde(rename = "resourceID")]
    pub resource_id: B256,
    /// Gas limit of the destination chain message, as a decimal string.
    pub msg_gas_limit: String,
    /// Time the underlying market data was sampled at.
    pub data_timestamp: u64,
    /// Time the quote was signed at.
    pub signature_timestamp: u64,
    /// Time after which the fee handler rejects the quote.
    pub expiration_timestamp: u64,
}

impl FeeOracleQuote {
    /// Returns `true` if none of the string fields are blank.
    pub fn is_complete(&self) -> bool {
        [
            &self.base_effective_rate,
            &self.token_effective_rate,
            &self.dst_gas_price,
            &self.signature,
            &self.msg_gas_limit,
        ]
        .into_iter()
        .all(|field| !field.trim().is_empty())
    }

    /// Returns `true` if the quote is past its expiration at the given UNIX timestamp.
    ///
    /// The fee calculation does not check this; the fee handler contract does.
    pub fn is_expired_at(&self, timestamp: u64) -> bool {
        timestamp > self.expiration_timestamp
    }

    /// Returns `true` if the quote was issued for the given request.
    pub fn matches(&self, request: &FeeOracleRequest) -> bool {
        self.from_domain_id == request.from_domain_id
            && self.to_domain_id == request.to_domain_id
            && self.resource_id == request.resource_id
    }
}

/// The `response` field of a fee oracle answer, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFeeOracleQuote(pub Value);

impl RawFeeOracleQuote {
    /// Validates the raw quote.
    ///
    /// A missing, empty or partial quote yields [`FeeError::EmptyOracleResponse`].
    pub fn into_quote(self) -> Result<FeeOracleQuote, FeeError> {
        let empty = match &self.0 {
            Value::Null => true,
            Value::Object(fields) => fields.is_empty(),
            _ => false,
        };
        if empty {
            return Err(FeeError::EmptyOracleResponse);
        }

        let quote = serde_json::from_value::<FeeOracleQuote>(self.0).map_err(|err| {
            debug!(%err, "Incomplete fee oracle quote.");
            FeeError::EmptyOracleResponse
        })?;

        if !quote.is_complete() {
            debug!(?quote, "Fee oracle quote has blank fields.");
            return Err(FeeError::EmptyOracleResponse);
        }

        Ok(quote)
    }
}

/// Body of a successful fee oracle HTTP response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeeOracleResponse {
    /// The quote.
    #[serde(default)]
    pub response: Option<RawFeeOracleQuote>,
    /// Diagnostic reported by the oracle instead of a quote.
    #[serde(default)]
    pub error: Option<Value>,
}

impl FeeOracleResponse {
    /// Returns the oracle diagnostic, if any.
    ///
    /// String diagnostics are returned verbatim, other JSON values in their serialized form.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null => None,
            Value::String(msg) if msg.is_empty() => None,
            Value::String(msg) => Some(msg.clone()),
            other => Some(other.to_string()),
        }
    }
}
