//! BoxAdapter -- object-safe dynamic dispatch wrapper for CompletionAdapter.
//!
//! 1. Define an object-safe `AdapterDyn` trait with boxed futures
//! 2. Blanket-impl `AdapterDyn` for all `T: CompletionAdapter`
//! 3. `BoxAdapter` wraps `Box<dyn AdapterDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use secrecy::SecretString;

use mnemo_types::dispatch::{ProviderError, ProviderId};

use super::adapter::CompletionAdapter;

/// Object-safe version of [`CompletionAdapter`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch (`dyn AdapterDyn`).
/// A blanket implementation is provided for all types implementing
/// `CompletionAdapter`.
pub trait AdapterDyn: Send + Sync {
    fn provider(&self) -> ProviderId;

    fn default_model(&self) -> &str;

    fn invoke_boxed<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
        max_tokens: u32,
        credential: &'a SecretString,
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>>;
}

/// Blanket implementation: any `CompletionAdapter` automatically implements
/// `AdapterDyn`.
impl<T: CompletionAdapter> AdapterDyn for T {
    fn provider(&self) -> ProviderId {
        CompletionAdapter::provider(self)
    }

    fn default_model(&self) -> &str {
        CompletionAdapter::default_model(self)
    }

    fn invoke_boxed<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
        max_tokens: u32,
        credential: &'a SecretString,
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>> {
        Box::pin(self.invoke(prompt, model, max_tokens, credential))
    }
}

/// Type-erased completion adapter for runtime provider selection.
///
/// Since `CompletionAdapter` uses RPITIT, it cannot be used as a trait
/// object directly. `BoxAdapter` provides equivalent methods that delegate
/// to the inner `AdapterDyn` trait object.
pub struct BoxAdapter {
    inner: Box<dyn AdapterDyn + Send + Sync>,
}

impl BoxAdapter {
    /// Wrap a concrete `CompletionAdapter` in a type-erased box.
    pub fn new<T: CompletionAdapter + 'static>(adapter: T) -> Self {
        Self {
            inner: Box::new(adapter),
        }
    }

    /// Which vendor this adapter speaks to.
    pub fn provider(&self) -> ProviderId {
        self.inner.provider()
    }

    /// Model used when the caller does not override one.
    pub fn default_model(&self) -> &str {
        self.inner.default_model()
    }

    /// Send one prompt and return the completion text.
    pub async fn invoke(
        &self,
        prompt: &str,
        model: &str,
        max_tokens: u32,
        credential: &SecretString,
    ) -> Result<String, ProviderError> {
        self.inner
            .invoke_boxed(prompt, model, max_tokens, credential)
            .await
    }
}
