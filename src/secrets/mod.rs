//! Secrets management module
//!
//! All environment access in zora-coins goes through the `SecretsProvider`
//! trait; there should be no direct `std::env::var()` calls elsewhere.
//!
//! - **EnvSecretsProvider** (default): process environment plus `.env`
//! - **StaticSecretsProvider**: a fixed snapshot, used for tests and embedding

mod env;

pub use env::EnvSecretsProvider;

use std::collections::HashMap;

/// Provides access to secrets and environment variables
///
/// Lookups are synchronous: configuration is read once at startup, before
/// any collaborator is contacted.
pub trait SecretsProvider: Send + Sync {
    /// Get a single secret value by key
    ///
    /// Returns None if the secret doesn't exist.
    fn get_secret(&self, key: &str) -> Option<String>;

    /// Get a secret that is present and non-empty
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get_secret(key).filter(|v| !v.is_empty())
    }

    /// Get a secret value with a default fallback for absent or empty values
    fn get_secret_or(&self, key: &str, default: &str) -> String {
        self.get_non_empty(key)
            .unwrap_or_else(|| default.to_string())
    }
}

/// Secrets provider backed by a fixed map
#[derive(Debug, Clone, Default)]
pub struct StaticSecretsProvider {
    values: HashMap<String, String>,
}

impl StaticSecretsProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticSecretsProvider {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SecretsProvider for StaticSecretsProvider {
    fn get_secret(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_lookup() {
        let provider = StaticSecretsProvider::new().with("A", "1");
        assert_eq!(provider.get_secret("A"), Some("1".to_string()));
        assert_eq!(provider.get_secret("B"), None);
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let provider: StaticSecretsProvider = [("EMPTY", "")].into_iter().collect();

        assert_eq!(provider.get_secret("EMPTY"), Some(String::new()));
        assert_eq!(provider.get_non_empty("EMPTY"), None);
        assert_eq!(provider.get_secret_or("EMPTY", "fallback"), "fallback");
    }

    #[test]
    fn test_get_secret_or_prefers_value() {
        let provider = StaticSecretsProvider::new().with("PORT", "8080");
        assert_eq!(provider.get_secret_or("PORT", "3000"), "8080");
        assert_eq!(provider.get_secret_or("MISSING", "3000"), "3000");
    }
}
