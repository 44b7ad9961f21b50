//! Dynamic fee configuration.
use crate::{constants::DEFAULT_RATE_DECIMALS, encoding::FeeDataEncoder};
use alloy::primitives::Address;
use eyre::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Default fee oracle URL.
const DEFAULT_ORACLE_URL: &str = "http://localhost:8091";

/// Dynamic fee configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Fee oracle base URL.
    pub oracle_url: Url,
    /// RPC endpoint of the source chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<Url>,
    /// Dynamic fee handler contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_handler: Option<Address>,
    /// Fixed-point scale of the oracle effective rates.
    #[serde(default = "default_rate_decimals")]
    pub rate_decimals: u8,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            oracle_url: Url::parse(DEFAULT_ORACLE_URL).expect("valid url"),
            rpc_url: None,
            fee_handler: None,
            rate_decimals: DEFAULT_RATE_DECIMALS,
        }
    }
}

const fn default_rate_decimals() -> u8 {
    DEFAULT_RATE_DECIMALS
}

impl FeeConfig {
    /// Sets the fee oracle base URL.
    pub fn with_oracle_url(mut self, oracle_url: Url) -> Self {
        self.oracle_url = oracle_url;
        self
    }

    /// Sets the RPC endpoint.
    pub fn with_rpc_url(mut self, rpc_url: Option<Url>) -> Self {
        if let Some(rpc_url) = rpc_url {
            self.rpc_url = Some(rpc_url);
        }
        self
    }

    /// Sets the fee handler contract.
    pub fn with_fee_handler(mut self, fee_handler: Option<Address>) -> Self {
        if let Some(fee_handler) = fee_handler {
            self.fee_handler = Some(fee_handler);
        }
        self
    }

    /// Sets the fixed-point scale of the effective rates.
    pub fn with_rate_decimals(mut self, rate_decimals: u8) -> Self {
        self.rate_decimals = rate_decimals;
        self
    }

    /// Returns the fee data encoder for this configuration.
    pub fn encoder(&self) -> FeeDataEncoder {
        FeeDataEncoder::new(self.rate_decimals)
    }

    /// Load from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("failed to read config file: {}", path.display()))?;
        let config = serde_yaml::from_reader(&file)
            .wrap_err_with(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save to a YAML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> eyre::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
