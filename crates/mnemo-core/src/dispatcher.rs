//! Completion dispatch: single calls and windowed, rate-paced batch calls.
//!
//! `call` resolves a provider and model, then invokes the matching adapter.
//! `batch_call` processes a prompt set in consecutive windows of
//! `concurrency` items: every member of a window is issued together, the
//! window settles fully before the next one starts, and a fixed pause
//! separates windows. Per-item failures are captured as data and never
//! abort siblings or later windows.

use std::time::Duration;

use futures_util::future::join_all;
use secrecy::SecretString;

use mnemo_types::credentials::CredentialStore;
use mnemo_types::dispatch::{
    BatchItem, BatchProgress, CallOptions, ConfigError, DispatchError,
};

use super::progress::ProgressBus;
use super::registry::AdapterRegistry;
use super::resolver;

/// Capacity of the progress broadcast channel.
const PROGRESS_CAPACITY: usize = 64;

/// Dispatches prompts to vendor adapters under a bounded-concurrency,
/// rate-paced schedule.
///
/// The registry and credential store are read-only for the dispatcher's
/// lifetime; nothing is mutated concurrently, so batch windows need no
/// locking.
pub struct Dispatcher {
    registry: AdapterRegistry,
    credentials: CredentialStore,
    progress: ProgressBus,
}

impl Dispatcher {
    /// Create a dispatcher over the given adapters and credentials.
    pub fn new(registry: AdapterRegistry, credentials: CredentialStore) -> Self {
        Self {
            registry,
            credentials,
            progress: ProgressBus::new(PROGRESS_CAPACITY),
        }
    }

    /// The bus on which batch progress notifications are published.
    pub fn progress(&self) -> &ProgressBus {
        &self.progress
    }

    /// Send one prompt and return the completion text.
    ///
    /// Provider resolution: explicit `options.provider` (rejected if it
    /// names no supported vendor), else the first provider in priority
    /// order with a non-empty credential. Model resolution:
    /// `options.model`, else the adapter's default. Errors are surfaced to
    /// the caller without local recovery.
    pub async fn call(
        &self,
        prompt: &str,
        options: &CallOptions,
    ) -> Result<String, DispatchError> {
        let provider =
            resolver::resolve_provider(options.provider.as_deref(), &self.credentials)?;
        let adapter = self
            .registry
            .get(provider)
            .ok_or_else(|| ConfigError::UnknownProvider(provider.to_string()))?;
        let model = options.model.as_deref().unwrap_or(adapter.default_model());

        // An explicitly selected provider may have no key configured; the
        // vendor rejects the empty credential and that error is surfaced
        // like any other provider failure.
        let empty = SecretString::from("");
        let credential = self.credentials.get(provider).unwrap_or(&empty);

        tracing::debug!(provider = %provider, model, "dispatching completion");
        let text = adapter
            .invoke(prompt, model, options.max_tokens, credential)
            .await?;
        Ok(text)
    }

    /// Dispatch many prompts under windowed concurrency and fixed pacing.
    ///
    /// The result is index-aligned with `prompts`: position `i` always
    /// holds the outcome for `prompts[i]`, regardless of completion order.
    /// At most `options.concurrency` invocations are in flight at once,
    /// windows never interleave, and `options.delay_ms` separates
    /// consecutive window starts (no pause after the last window). One
    /// [`BatchProgress`] notification is published per settled window.
    pub async fn batch_call(&self, prompts: &[String], options: &CallOptions) -> Vec<BatchItem> {
        let total = prompts.len();
        let window_size = options.concurrency.max(1);
        let window_count = total.div_ceil(window_size);
        let mut results = Vec::with_capacity(total);

        for (window_idx, window) in prompts.chunks(window_size).enumerate() {
            tracing::debug!(window = window_idx, size = window.len(), "processing window");

            let settled = join_all(window.iter().map(|prompt| self.call(prompt, options))).await;
            for outcome in settled {
                results.push(match outcome {
                    Ok(text) => BatchItem::Text(text),
                    Err(err) => {
                        tracing::warn!(error = %err, "batch item failed");
                        BatchItem::Failure {
                            error: err.to_string(),
                        }
                    }
                });
            }

            self.progress.publish(BatchProgress {
                completed: results.len(),
                total,
            });

            if window_idx + 1 < window_count {
                tokio::time::sleep(Duration::from_millis(options.delay_ms)).await;
            }
        }

        results
    }
}
