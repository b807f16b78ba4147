//! Request text completions from an external language model.
//!
//! The [`CompletionProvider`] trait is the only seam between the ranking
//! pipeline and the completion service. Callers construct a provider once
//! and pass it to the ranking engine explicitly; nothing here holds global
//! client state.
//!
//! Errors describe transport and protocol failures. Callers treat every
//! variant as recoverable.

mod error;
mod provider;

pub use error::CompletionError;
pub use provider::{CompletionProvider, CompletionRequest};
