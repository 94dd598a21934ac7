//! Environment variable based secrets provider
//!
//! Reads secrets directly from the process environment, with .env file
//! support via dotenvy.

use super::*;

/// Default secrets provider that reads from environment variables
///
/// This is the only place in the crate where `dotenvy::dotenv()` and
/// `std::env::var()` are called.
pub struct EnvSecretsProvider;

impl EnvSecretsProvider {
    /// Create a new environment-based secrets provider
    ///
    /// Loads the .env file from the current directory or any parent. A
    /// missing .env file is not an error.
    pub fn new() -> Self {
        let _ = dotenvy::dotenv();

        Self
    }
}

impl Default for EnvSecretsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretsProvider for EnvSecretsProvider {
    fn get_secret(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
