//! Provider resolution over the credential store.
//!
//! The "first provider with a non-empty credential, in fixed priority
//! order" rule lives here as a standalone pure function, separate from the
//! HTTP call path.

use mnemo_types::credentials::CredentialStore;
use mnemo_types::dispatch::{ConfigError, ProviderId};

/// Fixed priority order for credential-based provider selection.
pub const PROVIDER_PRIORITY: [ProviderId; 3] = [
    ProviderId::Anthropic,
    ProviderId::OpenAi,
    ProviderId::Google,
];

/// First provider, in priority order, holding a non-empty credential.
pub fn default_provider(credentials: &CredentialStore) -> Result<ProviderId, ConfigError> {
    PROVIDER_PRIORITY
        .iter()
        .copied()
        .find(|provider| credentials.is_configured(*provider))
        .ok_or(ConfigError::NoApiKeys)
}

/// Resolve the provider for a call.
///
/// An explicit override is parsed and rejected with `Unknown provider:
/// <name>` if it names none of the supported vendors, regardless of what
/// credentials are configured. Without an override, falls back to the
/// credential scan.
pub fn resolve_provider(
    explicit: Option<&str>,
    credentials: &CredentialStore,
) -> Result<ProviderId, ConfigError> {
    match explicit {
        Some(name) => name
            .parse()
            .map_err(|_| ConfigError::UnknownProvider(name.to_string())),
        None => default_provider(credentials),
    }
}
