//! CompletionAdapter trait definition.
//!
//! This is the core abstraction that all vendor adapters implement. Uses
//! native async fn in traits (RPITIT); the object-safe wrapper for runtime
//! dispatch is [`crate::box_adapter::BoxAdapter`].

use std::future::Future;

use secrecy::SecretString;

use mnemo_types::dispatch::{ProviderError, ProviderId};

/// Trait for vendor completion backends (Anthropic, OpenAI, Google).
///
/// An adapter translates one generic invocation into that vendor's HTTP
/// contract and extracts one text result. Adapters are stateless with
/// respect to credentials: the key is passed per call, so a single adapter
/// instance serves whatever credential the dispatcher resolves.
///
/// Implementations live in mnemo-infra.
pub trait CompletionAdapter: Send + Sync {
    /// Which vendor this adapter speaks to.
    fn provider(&self) -> ProviderId;

    /// Model used when the caller does not override one.
    ///
    /// Deliberately independent of the tiered model catalog — the catalog
    /// is consulted only by callers that explicitly request a tier.
    fn default_model(&self) -> &str;

    /// Send one prompt and return the completion text.
    fn invoke(
        &self,
        prompt: &str,
        model: &str,
        max_tokens: u32,
        credential: &SecretString,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}
