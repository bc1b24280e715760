//! Shared domain types for mnemo.
//!
//! This crate is the foundation layer: provider identifiers, call options,
//! batch outcomes, progress notifications, the dispatch error taxonomy, and
//! the read-only credential store. It depends on no other workspace crate.

pub mod credentials;
pub mod dispatch;
