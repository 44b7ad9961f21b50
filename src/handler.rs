//! Fee handler contract access.

use crate::types::IDynamicFeeHandler::{self, IDynamicFeeHandlerInstance};
use alloy::{
    primitives::{Address, B256, Bytes, U256},
    providers::Provider,
};
use async_trait::async_trait;
use std::fmt;
use tracing::instrument;

/// Arguments of a fee handler `calculateFee` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeCalculationRequest {
    /// Depositor.
    pub sender: Address,
    /// Source domain.
    pub from_domain_id: u8,
    /// Destination domain.
    pub to_domain_id: u8,
    /// Resource being transferred.
    pub resource_id: B256,
    /// Deposit payload.
    pub deposit_data: Bytes,
    /// Encoded oracle fee data.
    pub fee_data: Bytes,
}

/// Result of a fee handler `calculateFee` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeCalculation {
    /// Fee amount.
    pub fee: U256,
    /// Token the fee is paid in.
    pub token_address: Address,
}

/// A fee handler that computes the authoritative fee for a deposit.
#[async_trait]
pub trait FeeHandler: Send + Sync {
    /// Returns the fee handler contract address.
    fn address(&self) -> Address;

    /// Computes the fee for the given deposit.
    ///
    /// Errors are returned as produced by the contract call.
    async fn calculate_fee(
        &self,
        request: FeeCalculationRequest,
    ) -> Result<FeeCalculation, alloy::contract::Error>;
}

/// [`FeeHandler`] backed by a deployed [`IDynamicFeeHandler`] contract.
#[derive(Clone)]
pub struct OnChainFeeHandler<P> {
    contract: IDynamicFeeHandlerInstance<P>,
}

impl<P: Provider> OnChainFeeHandler<P> {
    /// Creates a handler calling the contract at `address` through `provider`.
    pub fn new(address: Address, provider: P) -> Self {
        Self { contract: IDynamicFeeHandler::new(address, provider) }
    }
}

impl<P: Provider> fmt::Debug for OnChainFeeHandler<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnChainFeeHandler").field("address", self.contract.address()).finish()
    }
}

#[async_trait]
impl<P: Provider> FeeHandler for OnChainFeeHandler<P> {
    fn address(&self) -> Address {
        *self.contract.address()
    }

    #[instrument(skip_all, fields(handler = %self.contract.address(), sender = %request.sender))]
    async fn calculate_fee(
        &self,
        request: FeeCalculationRequest,
    ) -> Result<FeeCalculation, alloy::contract::Error> {
        let IDynamicFeeHandler::calculateFeeReturn { fee, tokenAddress } = self
            .contract
            .calculateFee(
                request.sender,
                request.from_domain_id,
                request.to_domain_id,
                request.resource_id,
                request.deposit_data,
                request.fee_data,
            )
            .call()
            .await?;

        Ok(FeeCalculation { fee, token_address: tokenAddress })
    }
}
