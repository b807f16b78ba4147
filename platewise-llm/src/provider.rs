//! HTTP-based `CompletionProvider` for OpenAI-compatible chat endpoints.
//!
//! The [`CompletionProvider`] trait is synchronous so the ranking engine can
//! run in plain threads. This provider bridges the async HTTP call to the
//! sync interface by blocking on a Tokio runtime internally.

use std::fmt;
use std::{panic, thread};
use std::time::Duration;

use log::debug;
use platewise_core::{CompletionError, CompletionProvider, CompletionRequest};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use crate::chat::{ChatMessage, ChatRequest, ChatResponse};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";
/// Default service root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
/// Default user agent for completion requests.
pub const DEFAULT_USER_AGENT: &str = "platewise/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Error type for [`HttpCompletionProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The API key was empty.
    #[error("completion API key must not be blank")]
    MissingApiKey,
}

/// Configuration for [`HttpCompletionProvider`].
#[derive(Clone)]
pub struct CompletionConfig {
    /// Service root, e.g. `"https://api.groq.com/openai/v1"`.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion length cap.
    pub max_tokens: u32,
    /// Connect and total request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl CompletionConfig {
    /// Create a configuration with default endpoint settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Read the API key from [`API_KEY_ENV`].
    ///
    /// Returns `None` when the variable is unset or blank.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_api_key(std::env::var(API_KEY_ENV).ok().as_deref())
    }

    /// Build a configuration from an optional key, treating blank as absent.
    #[must_use]
    pub fn from_api_key(api_key: Option<&str>) -> Option<Self> {
        api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(Self::new)
    }

    /// Set the service root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion length cap.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Completion provider calling `POST {base_url}/chat/completions`.
///
/// The provider owns a Tokio runtime that is reused across calls.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the provider blocks on its own runtime. Inside
/// a multi-threaded runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]) it blocks on the caller's handle through
/// [`tokio::task::block_in_place`]. A `current_thread` runtime cannot be
/// blocked on from its own thread, so there the request runs on the
/// provider's runtime from a scoped helper thread while the caller's thread
/// waits for it.
pub struct HttpCompletionProvider {
    client: Client,
    config: CompletionConfig,
    runtime: Runtime,
}

impl fmt::Debug for HttpCompletionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpCompletionProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpCompletionProvider {
    /// Create a provider with default settings for `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(CompletionConfig::new(api_key))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: CompletionConfig) -> Result<Self, ProviderBuildError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderBuildError::MissingApiKey);
        }
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Chat completions endpoint for the configured service root.
    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn complete_async(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let url = self.completions_url();
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        debug!("requesting completion from {url} with model {}", self.config.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Http {
                url,
                status: status.as_u16(),
                message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;
        Self::convert_response(&text)
    }

    /// Convert a reqwest error to a `CompletionError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> CompletionError {
        if error.is_timeout() {
            return CompletionError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return CompletionError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        CompletionError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Extract the completion text from a response body.
    fn convert_response(body: &str) -> Result<String, CompletionError> {
        let response: ChatResponse =
            serde_json::from_str(body).map_err(|err| CompletionError::Decode {
                message: err.to_string(),
            })?;
        response
            .into_content()
            .ok_or(CompletionError::EmptyResponse)
    }
}

impl CompletionProvider for HttpCompletionProvider {
    /// Send `request` and return the first choice's text.
    ///
    /// # Runtime requirements
    ///
    /// Safe to call from any thread, including ones driving a Tokio runtime
    /// of either flavour; see the type-level documentation.
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let future = self.complete_async(request);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            Ok(_) => thread::scope(|scope| {
                scope
                    .spawn(|| self.runtime.block_on(future))
                    .join()
                    .unwrap_or_else(|payload| panic::resume_unwind(payload))
            }),
            Err(_) => self.runtime.block_on(future),
        }
    }
}
