//! Completion provider trait and its request type.

use std::sync::Arc;

use super::error::CompletionError;

/// A single-turn completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Instructions framing the task.
    pub system: String,
    /// The task itself, including any context data.
    pub user: String,
}

impl CompletionRequest {
    /// Pair a system instruction with a user message.
    #[must_use]
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Produce completion text for a request.
///
/// Implementations perform one blocking call per invocation and must not
/// retry. Providers are shared across request threads, hence `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use platewise_core::{CompletionError, CompletionProvider, CompletionRequest};
///
/// struct EchoProvider;
///
/// impl CompletionProvider for EchoProvider {
///     fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
///         if request.user.is_empty() {
///             return Err(CompletionError::EmptyResponse);
///         }
///         Ok(request.user.clone())
///     }
/// }
///
/// let reply = EchoProvider.complete(&CompletionRequest::new("system", "[]"))?;
/// assert_eq!(reply, "[]");
/// # Ok::<(), CompletionError>(())
/// ```
pub trait CompletionProvider: Send + Sync {
    /// Return the raw completion text for `request`.
    ///
    /// # Errors
    /// Returns [`CompletionError`] for transport, status and decoding
    /// failures.
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

impl<P: CompletionProvider + ?Sized> CompletionProvider for Box<P> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        (**self).complete(request)
    }
}

impl<P: CompletionProvider + ?Sized> CompletionProvider for Arc<P> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        (**self).complete(request)
    }
}
