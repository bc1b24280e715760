//! Read-only credential store mapping providers to API keys.
//!
//! Keys are wrapped in [`secrecy::SecretString`] and are only exposed when
//! an adapter constructs HTTP request headers. The store is immutable for
//! the lifetime of a dispatcher: it is built once by the caller and never
//! mutated by the core.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

use crate::dispatch::ProviderId;

/// Immutable map from provider to API key.
///
/// Entries may be absent or hold an empty string; [`is_configured`] treats
/// both the same way. There is no removal or overwrite API on purpose.
///
/// [`is_configured`]: CredentialStore::is_configured
pub struct CredentialStore {
    keys: HashMap<ProviderId, SecretString>,
}

// CredentialStore intentionally does NOT derive Debug. SecretString already
// redacts its contents, but omitting Debug entirely keeps the key map out
// of logs and panic messages altogether.

impl CredentialStore {
    /// Build a store from a prepared key map.
    pub fn new(keys: HashMap<ProviderId, SecretString>) -> Self {
        Self { keys }
    }

    /// A store with no keys at all.
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// Add a key at construction time, builder-style.
    pub fn with_key(mut self, provider: ProviderId, key: SecretString) -> Self {
        self.keys.insert(provider, key);
        self
    }

    /// The key for a provider, if one was supplied.
    pub fn get(&self, provider: ProviderId) -> Option<&SecretString> {
        self.keys.get(&provider)
    }

    /// Whether the provider has a non-empty key.
    pub fn is_configured(&self, provider: ProviderId) -> bool {
        self.keys
            .get(&provider)
            .is_some_and(|key| !key.expose_secret().is_empty())
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_nothing_configured() {
        let store = CredentialStore::empty();
        for provider in [ProviderId::Anthropic, ProviderId::OpenAi, ProviderId::Google] {
            assert!(!store.is_configured(provider));
            assert!(store.get(provider).is_none());
        }
    }

    #[test]
    fn test_with_key_configures_only_that_provider() {
        let store =
            CredentialStore::empty().with_key(ProviderId::OpenAi, SecretString::from("sk-test"));
        assert!(store.is_configured(ProviderId::OpenAi));
        assert!(!store.is_configured(ProviderId::Anthropic));
        assert_eq!(
            store.get(ProviderId::OpenAi).unwrap().expose_secret(),
            "sk-test"
        );
    }

    #[test]
    fn test_empty_string_key_counts_as_unconfigured() {
        let store =
            CredentialStore::empty().with_key(ProviderId::Google, SecretString::from(""));
        assert!(!store.is_configured(ProviderId::Google));
        // The entry itself is still present, it just holds no usable key.
        assert!(store.get(ProviderId::Google).is_some());
    }
}
