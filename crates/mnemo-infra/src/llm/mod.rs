//! Vendor HTTP adapters for the three supported completion providers.
//!
//! Each adapter translates one generic invocation into its vendor's HTTP
//! contract: Anthropic's Messages API, OpenAI's chat completions, and
//! Google's generateContent. All three nest their error message under
//! `error.message`, so envelope extraction is shared.

pub mod anthropic;
pub mod google;
pub mod openai;

use std::time::Duration;

use serde::Deserialize;

use mnemo_core::box_adapter::BoxAdapter;
use mnemo_core::registry::AdapterRegistry;

pub use anthropic::AnthropicAdapter;
pub use google::GoogleAdapter;
pub use openai::OpenAiAdapter;

/// Client-level timeout for vendor requests. No per-call deadline exists
/// beyond this; a hung call holds its batch window until the client gives
/// up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Build a registry with all three vendor adapters over one shared HTTP
/// client.
pub fn default_registry() -> AdapterRegistry {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("failed to create reqwest client");

    let mut registry = AdapterRegistry::new();
    registry.register(BoxAdapter::new(AnthropicAdapter::new(client.clone())));
    registry.register(BoxAdapter::new(OpenAiAdapter::new(client.clone())));
    registry.register(BoxAdapter::new(GoogleAdapter::new(client)));
    registry
}

/// Vendor error envelope: all three APIs nest a message under `error`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

/// Extract the vendor message from a non-success response body.
///
/// Falls back to the raw HTTP status text when the envelope is absent or
/// malformed.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string())
        })
}
