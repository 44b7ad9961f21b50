//! # Dynamic fee CLI
use crate::{
    config::FeeConfig,
    encoding::EncodedFeeData,
    fee::{DynamicFeeCalculator, TransferRequest},
    handler::OnChainFeeHandler,
    oracle::FeeOracleClient,
    types::{FeeOracleQuote, FeeOracleRequest},
};
use alloy::{
    primitives::{Address, B256, Bytes},
    providers::ProviderBuilder,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use eyre::OptionExt;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Resolves dynamic bridge fees from a fee oracle and a fee handler contract.
#[derive(Debug, Parser)]
#[command(author, about = "Dynamic fee", long_about = None)]
pub struct Args {
    /// The configuration file.
    ///
    /// If missing, defaults are used.
    #[arg(long, value_name = "CONFIG", env = "DYNAMIC_FEE_CONFIG", global = true)]
    pub config: Option<PathBuf>,
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a quote from the fee oracle and print it together with the encoded fee data.
    Quote(QuoteArgs),
    /// Compute the fee of a deposit through the fee handler contract.
    Calculate(CalculateArgs),
}

/// Transfer the fee is resolved for.
#[derive(Debug, Clone, ClapArgs)]
pub struct TransferArgs {
    /// The fee oracle base URL.
    #[arg(long = "oracle-url", value_name = "URL", env = "FEE_ORACLE_URL")]
    pub oracle_url: Option<Url>,
    /// Source domain.
    #[arg(long = "from", value_name = "DOMAIN_ID")]
    pub from_domain_id: u8,
    /// Destination domain.
    #[arg(long = "to", value_name = "DOMAIN_ID")]
    pub to_domain_id: u8,
    /// Resource being transferred.
    #[arg(long = "resource-id", value_name = "RESOURCE_ID")]
    pub resource_id: B256,
    /// Transferred amount in base 10 minor units.
    #[arg(long, value_name = "AMOUNT")]
    pub amount: String,
}

impl TransferArgs {
    fn oracle_request(&self) -> FeeOracleRequest {
        FeeOracleRequest::new(self.from_domain_id, self.to_domain_id, self.resource_id)
    }
}

/// Arguments of [`Command::Quote`].
#[derive(Debug, Clone, ClapArgs)]
pub struct QuoteArgs {
    #[command(flatten)]
    transfer: TransferArgs,
}

/// Arguments of [`Command::Calculate`].
#[derive(Debug, Clone, ClapArgs)]
pub struct CalculateArgs {
    #[command(flatten)]
    transfer: TransferArgs,
    /// The depositor.
    #[arg(long, value_name = "ADDRESS")]
    sender: Address,
    /// The dynamic fee handler contract.
    #[arg(long = "fee-handler", value_name = "ADDRESS")]
    fee_handler: Option<Address>,
    /// The RPC endpoint of the source chain.
    #[arg(long = "rpc-url", value_name = "RPC_ENDPOINT", env = "RPC_URL")]
    rpc_url: Option<Url>,
    /// The deposit payload.
    #[arg(long = "deposit-data", value_name = "HEX", default_value = "0x")]
    deposit_data: Bytes,
}

/// Output of [`Command::Quote`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteOutput {
    quote: FeeOracleQuote,
    fee_data: EncodedFeeData,
}

impl Args {
    /// Runs the command.
    pub async fn run(self) -> eyre::Result<()> {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .init();

        let config = match &self.config {
            Some(path) => FeeConfig::load_from_file(path)?,
            None => FeeConfig::default(),
        };

        match self.command {
            Command::Quote(args) => args.run(config).await,
            Command::Calculate(args) => args.run(config).await,
        }
    }
}

impl QuoteArgs {
    async fn run(self, config: FeeConfig) -> eyre::Result<()> {
        let config = apply_oracle_url(config, &self.transfer);
        let oracle = FeeOracleClient::new(config.oracle_url.clone());
        let request = self.transfer.oracle_request();

        info!(url = %oracle.request_url(&request), "Requesting fee quote");
        let quote = oracle.quote(&request).await?;
        let fee_data = config.encoder().encode(&quote, &self.transfer.amount)?;

        print_json(&QuoteOutput { quote, fee_data })
    }
}

impl CalculateArgs {
    async fn run(self, config: FeeConfig) -> eyre::Result<()> {
        let config = apply_oracle_url(config, &self.transfer)
            .with_rpc_url(self.rpc_url)
            .with_fee_handler(self.fee_handler);
        let rpc_url = config.rpc_url.clone().ok_or_eyre("missing rpc url")?;
        let fee_handler = config.fee_handler.ok_or_eyre("missing fee handler address")?;

        let provider = ProviderBuilder::new().connect_http(rpc_url);
        let calculator = DynamicFeeCalculator::new(
            FeeOracleClient::new(config.oracle_url.clone()),
            OnChainFeeHandler::new(fee_handler, provider),
        )
        .with_encoder(config.encoder());

        let transfer = TransferRequest {
            sender: self.sender,
            from_domain_id: self.transfer.from_domain_id,
            to_domain_id: self.transfer.to_domain_id,
            resource_id: self.transfer.resource_id,
            token_amount: self.transfer.amount,
            deposit_data: self.deposit_data,
        };

        info!(%fee_handler, sender = %transfer.sender, "Calculating dynamic fee");
        let result = calculator.calculate(&transfer).await?;

        print_json(&result)
    }
}

fn apply_oracle_url(config: FeeConfig, transfer: &TransferArgs) -> FeeConfig {
    match &transfer.oracle_url {
        Some(url) => config.with_oracle_url(url.clone()),
        None => config,
    }
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
