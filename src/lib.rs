//! zora-coins - Create and query Zora coins from the command line
//!
//! The library can be:
//! - Run as a CLI tool (`zora-coins` binary)
//! - Embedded, driving the [`cli::Dispatcher`] with custom secrets and SDK connectors
//!
//! # Architecture
//!
//! - [`config`] validates the environment into an immutable [`Config`]
//! - [`cli`] maps one command to a handler and an exit status
//! - [`handlers`] sequence SDK calls and return a uniform `CommandResult`
//! - [`sdk`] wraps the Zora API, the IPFS uploader and the chain wallet
//!
//! # Example
//!
//! ```rust,no_run
//! use zora_coins::cli::Dispatcher;
//! use zora_coins::sdk::ZoraConnector;
//! use zora_coins::secrets::EnvSecretsProvider;
//!
//! #[tokio::main]
//! async fn main() {
//!     let secrets = EnvSecretsProvider::new();
//!     let mut dispatcher = Dispatcher::new(&secrets, &ZoraConnector, std::io::stdout());
//!     let status = dispatcher.dispatch(["zora-coins", "query"]).await;
//!     println!("{:?}", status);
//! }
//! ```

// Core modules
pub mod constants;
pub mod error;

// Infrastructure
pub mod config;
pub mod secrets;
pub mod telemetry;

// Collaborators and commands
pub mod cli;
pub mod handlers;
pub mod sdk;

// Re-exports for convenience
pub use config::Config;
pub use error::{CoinsError, Result};

/// Initialize logging for the application
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "zora_coins=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
