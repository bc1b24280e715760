//! Dispatch request/response types for mnemo.
//!
//! These types model the data shapes for completion dispatch: per-call
//! options, per-item batch outcomes, progress notifications, and the
//! error taxonomy shared by the dispatcher and the vendor adapters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three supported completion vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Anthropic,
    OpenAi,
    Google,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::Anthropic => write!(f, "anthropic"),
            ProviderId::OpenAi => write!(f, "openai"),
            ProviderId::Google => write!(f, "google"),
        }
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(ProviderId::Anthropic),
            "openai" => Ok(ProviderId::OpenAi),
            "google" => Ok(ProviderId::Google),
            other => Err(format!("invalid provider: '{other}'")),
        }
    }
}

/// Options recognized by `call` and `batch_call`.
///
/// `provider` is kept as a raw string so that an unrecognized name can be
/// rejected at resolution time with a config error instead of failing to
/// deserialize. `concurrency` and `delay_ms` only affect batch calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallOptions {
    /// Override the credential-based default provider selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Override the adapter's default model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Completion token budget passed through to the vendor.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Window size: maximum simultaneously in-flight requests (batch only).
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Fixed pause between consecutive windows (batch only).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_concurrency() -> usize {
    5
}

fn default_delay_ms() -> u64 {
    200
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            provider: None,
            model: None,
            max_tokens: default_max_tokens(),
            concurrency: default_concurrency(),
            delay_ms: default_delay_ms(),
        }
    }
}

/// Outcome of a single batch item.
///
/// Exactly one of: the completion text, or a data-shaped error record.
/// Serializes as a bare string on success and `{"error": "<message>"}` on
/// failure, so a batch result is directly consumable as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchItem {
    Text(String),
    Failure { error: String },
}

impl BatchItem {
    /// The completion text, if this item succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            BatchItem::Text(text) => Some(text),
            BatchItem::Failure { .. } => None,
        }
    }

    /// The error message, if this item failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            BatchItem::Text(_) => None,
            BatchItem::Failure { error } => Some(error),
        }
    }

    /// Whether this item failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, BatchItem::Failure { .. })
    }
}

/// Progress notification published once per settled batch window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProgress {
    /// Number of results produced so far.
    pub completed: usize,
    /// Total number of prompts in the batch.
    pub total: usize,
}

/// Configuration errors: no usable credential, or an unsupported provider
/// named explicitly. The display strings are part of the call contract.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("No API keys configured")]
    NoApiKeys,
}

/// A failed vendor invocation: non-2xx response or transport fault.
///
/// Carries the best-effort human-readable message — the vendor envelope's
/// `error.message`, else the raw HTTP status text, else the transport
/// error's own message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by `call`. Batch calls catch these per item and report
/// them as [`BatchItem::Failure`] instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
