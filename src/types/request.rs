use alloy::primitives::B256;
use serde::{Deserialize, Serialize};

/// Identifies the transfer a fee quote is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeOracleRequest {
    /// Source domain.
    #[serde(rename = "fromDomainID")]
    pub from_domain_id: u8,
    /// Destination domain.
    #[serde(rename = "toDomainID")]
    pub to_domain_id: u8,
    /// Resource being transferred.
    #[serde(rename = "resourceID")]
    pub resource_id: B256,
}

impl FeeOracleRequest {
    /// Creates a new [`FeeOracleRequest`].
    pub const fn new(from_domain_id: u8, to_domain_id: u8, resource_id: B256) -> Self {
        Self { from_domain_id, to_domain_id, resource_id }
    }
}
