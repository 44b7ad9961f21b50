//! Dynamic fee calculation.
//!
//! Fetches a signed quote from the fee oracle, packs it into fee data and asks the fee handler
//! contract for the fee of a deposit. The two network round-trips run sequentially and are never
//! retried.

use crate::{
    encoding::FeeDataEncoder,
    error::FeeError,
    handler::{FeeCalculationRequest, FeeHandler, OnChainFeeHandler},
    oracle::FeeOracleClient,
    types::{DynamicFeeResult, FeeOracleRequest},
};
use alloy::{
    primitives::{Address, B256, Bytes},
    providers::Provider,
};
use tracing::{debug, instrument};
use url::Url;

/// Everything needed to compute the dynamic fee of a deposit.
#[derive(Debug, Clone)]
pub struct DynamicFeeParams<P> {
    /// Provider of the source chain.
    pub provider: P,
    /// Depositor.
    pub sender: Address,
    /// Source domain.
    pub from_domain_id: u8,
    /// Destination domain.
    pub to_domain_id: u8,
    /// Resource being transferred.
    pub resource_id: B256,
    /// Transferred amount in base 10 minor units.
    pub token_amount: String,
    /// Fee oracle base URL.
    pub fee_oracle_base_url: Url,
    /// Fee handler contract.
    pub fee_handler_address: Address,
    /// Deposit payload.
    pub deposit_data: Bytes,
}

impl<P> DynamicFeeParams<P> {
    /// Returns the transfer part of the params.
    pub fn transfer(&self) -> TransferRequest {
        TransferRequest {
            sender: self.sender,
            from_domain_id: self.from_domain_id,
            to_domain_id: self.to_domain_id,
            resource_id: self.resource_id,
            token_amount: self.token_amount.clone(),
            deposit_data: self.deposit_data.clone(),
        }
    }
}

/// The deposit a fee is calculated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Depositor.
    pub sender: Address,
    /// Source domain.
    pub from_domain_id: u8,
    /// Destination domain.
    pub to_domain_id: u8,
    /// Resource being transferred.
    pub resource_id: B256,
    /// Transferred amount in base 10 minor units.
    pub token_amount: String,
    /// Deposit payload.
    pub deposit_data: Bytes,
}

impl TransferRequest {
    /// Returns the oracle request for this transfer.
    pub fn oracle_request(&self) -> FeeOracleRequest {
        FeeOracleRequest::new(self.from_domain_id, self.to_domain_id, self.resource_id)
    }
}

/// Computes the dynamic fee of a deposit.
///
/// Rates are scaled with the default 18 decimals, see [`DynamicFeeCalculator`] for other scales.
pub async fn calculate_dynamic_fee<P: Provider>(
    params: DynamicFeeParams<P>,
) -> Result<DynamicFeeResult, FeeError> {
    let transfer = params.transfer();
    let DynamicFeeParams { provider, fee_oracle_base_url, fee_handler_address, .. } = params;

    DynamicFeeCalculator::new(
        FeeOracleClient::new(fee_oracle_base_url),
        OnChainFeeHandler::new(fee_handler_address, provider),
    )
    .calculate(&transfer)
    .await
}

/// Composes the fee oracle, the fee data encoder and a [`FeeHandler`].
///
/// Holds no per-call state and can be shared between concurrent calculations.
#[derive(Debug)]
pub struct DynamicFeeCalculator<H> {
    oracle: FeeOracleClient,
    handler: H,
    encoder: FeeDataEncoder,
}

impl<H: FeeHandler> DynamicFeeCalculator<H> {
    /// Creates a calculator using the default encoder.
    pub fn new(oracle: FeeOracleClient, handler: H) -> Self {
        Self { oracle, handler, encoder: FeeDataEncoder::default() }
    }

    /// Sets the fee data encoder.
    pub fn with_encoder(mut self, encoder: FeeDataEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Returns the fee handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Computes the fee of the given transfer.
    ///
    /// `fee` and `token_address` are returned exactly as reported by the fee handler.
    #[instrument(
        skip_all,
        fields(
            handler = %self.handler.address(),
            from = transfer.from_domain_id,
            to = transfer.to_domain_id
        )
    )]
    pub async fn calculate(
        &self,
        transfer: &TransferRequest,
    ) -> Result<DynamicFeeResult, FeeError> {
        let quote = self.oracle.quote(&transfer.oracle_request()).await?;
        let fee_data = self.encoder.encode(&quote, &transfer.token_amount)?;
        debug!(%fee_data, "Encoded fee data.");

        let calculation = self
            .handler
            .calculate_fee(FeeCalculationRequest {
                sender: transfer.sender,
                from_domain_id: transfer.from_domain_id,
                to_domain_id: transfer.to_domain_id,
                resource_id: transfer.resource_id,
                deposit_data: transfer.deposit_data.clone(),
                fee_data: fee_data.clone().into_bytes(),
            })
            .await?;

        Ok(DynamicFeeResult {
            fee: calculation.fee,
            token_address: calculation.token_address,
            fee_data,
        })
    }
}
