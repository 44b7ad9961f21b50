//! # Dynamic fee
//!
//! Resolves the fee of a cross-chain bridge deposit from a signed fee oracle quote.
//!
//! The quote is packed into fee data understood by the dynamic fee handler contract, which then
//! computes the authoritative fee. See [`fee::calculate_dynamic_fee`].

pub mod cli;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod fee;
pub mod handler;
pub mod oracle;
pub mod types;
