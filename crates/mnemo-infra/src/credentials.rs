//! Environment-based credential loading.
//!
//! Reads one API key per provider from the process environment. Unset and
//! empty variables are skipped, so the resulting store only holds usable
//! keys.

use std::collections::HashMap;

use secrecy::SecretString;

use mnemo_types::credentials::CredentialStore;
use mnemo_types::dispatch::ProviderId;

/// Environment variable holding the Anthropic API key.
pub const ANTHROPIC_KEY_VAR: &str = "ANTHROPIC_API_KEY";
/// Environment variable holding the OpenAI API key.
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding the Google Gemini API key.
pub const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";

/// Build a credential store from the process environment.
pub fn credentials_from_env() -> CredentialStore {
    credentials_from_lookup(|var| std::env::var(var).ok())
}

/// Build a credential store from an arbitrary variable lookup.
///
/// Split out from [`credentials_from_env`] so the mapping is testable
/// without touching process state.
pub fn credentials_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> CredentialStore {
    let vars = [
        (ProviderId::Anthropic, ANTHROPIC_KEY_VAR),
        (ProviderId::OpenAi, OPENAI_KEY_VAR),
        (ProviderId::Google, GEMINI_KEY_VAR),
    ];

    let mut keys = HashMap::new();
    for (provider, var) in vars {
        if let Some(value) = lookup(var) {
            if !value.is_empty() {
                keys.insert(provider, SecretString::from(value));
            }
        }
    }
    CredentialStore::new(keys)
}
