//! Fee oracle client.

mod client;
pub use client::FeeOracleClient;
