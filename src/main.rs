//! zora-coins CLI
//!
//! Run with: cargo run --bin zora-coins -- <command>
//! Or after build: ./target/release/zora-coins <command>

use std::process::ExitCode;
use zora_coins::secrets::EnvSecretsProvider;

#[tokio::main]
async fn main() -> ExitCode {
    // Loads .env before anything reads the environment
    let secrets = EnvSecretsProvider::new();

    zora_coins::init_logging();

    zora_coins::cli::run(&secrets).await.into()
}
