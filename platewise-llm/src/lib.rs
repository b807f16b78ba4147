//! HTTP completion provider for Platewise.
//!
//! [`HttpCompletionProvider`] implements
//! [`platewise_core::CompletionProvider`] against an OpenAI-compatible
//! `chat/completions` endpoint, Groq's by default. The synchronous trait is
//! served by blocking on an internal Tokio runtime, keeping the ranking
//! pipeline free of async.
//!
//! # Example
//!
//! ```no_run
//! use platewise_core::{CompletionProvider, CompletionRequest};
//! use platewise_llm::{CompletionConfig, HttpCompletionProvider};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let Some(config) = CompletionConfig::from_env() else {
//!     return Ok(());
//! };
//! let provider = HttpCompletionProvider::with_config(config.with_timeout(Duration::from_secs(10)))?;
//! let text = provider.complete(&CompletionRequest::new("Reply with []", "Rank nothing."))?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod chat;
mod provider;

pub use provider::{
    API_KEY_ENV, CompletionConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_USER_AGENT,
    HttpCompletionProvider, ProviderBuildError,
};
