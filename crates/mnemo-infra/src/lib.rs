//! Infrastructure implementations for mnemo.
//!
//! Concrete [`mnemo_core::adapter::CompletionAdapter`] implementations for
//! the three supported vendors, plus environment-based credential loading.
//! All HTTP transport, request formatting, and response parsing live here;
//! mnemo-core sees only the adapter trait.

pub mod credentials;
pub mod llm;
