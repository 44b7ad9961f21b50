use crate::encoding::EncodedFeeData;
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// The fee for a transfer as computed by the fee handler contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFeeResult {
    /// Fee amount.
    pub fee: U256,
    /// Token the fee is paid in.
    pub token_address: Address,
    /// The fee data the fee was computed with.
    ///
    /// This has to be passed along with the deposit.
    pub fee_data: EncodedFeeData,
}
