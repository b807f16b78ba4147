//! Wire types for OpenAI-compatible chat completion endpoints.
//!
//! Only the fields the provider sends or reads are modelled; unknown response
//! fields are ignored.
//!
//! See: <https://platform.openai.com/docs/api-reference/chat>

use serde::{Deserialize, Serialize};

/// Body of `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    /// Model identifier.
    pub model: &'a str,
    /// Conversation, system message first.
    pub messages: [ChatMessage<'a>; 2],
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion length cap.
    pub max_tokens: u32,
}

/// One message of a chat conversation.
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    /// `"system"` or `"user"`.
    pub role: &'static str,
    /// Message text.
    pub content: &'a str,
}

/// Successful chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// Candidate completions; the provider reads the first.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One candidate completion.
#[derive(Debug, Deserialize)]
pub struct Choice {
    /// The generated assistant message.
    pub message: ChoiceMessage,
}

/// Assistant message inside a [`Choice`].
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text; absent for tool calls and refusals.
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, if it carries any non-blank content.
    #[must_use]
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
    }
}
