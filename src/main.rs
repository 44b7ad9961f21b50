//! # Dynamic fee
//!
//! Resolves the dynamic fee of a bridge deposit from a fee oracle and a fee handler contract.
use clap::Parser;
use dynamic_fee::cli::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(err) = args.run().await {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
