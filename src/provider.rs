#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The chat-completion seam. Every outbound model call goes through the
//! [`ChatProvider`] trait so the grading pipeline can be exercised in tests
//! with a scripted double instead of a live backend.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_openai::{
    Client as OpenAIClient,
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of an outbound chat-completion call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The backend rejected or failed the request (network, provider error,
    /// malformed request).
    #[error("chat backend error: {0}")]
    Backend(String),
    /// The backend answered but the response carried no usable content.
    #[error("chat backend returned no content")]
    EmptyResponse,
}

impl From<OpenAIError> for ProviderError {
    fn from(err: OpenAIError) -> Self {
        ProviderError::Backend(err.to_string())
    }
}

/// A stateless text-generation service: takes a fully rendered prompt and a
/// sampling temperature, returns the generated text.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Executes one chat completion. No retries are attempted at this layer;
    /// whatever timeout the underlying transport applies is authoritative.
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ProviderError>;
}

/// Production provider over the OpenAI-compatible chat API. Holds no
/// per-request state, so one handle is safely shared across concurrent
/// request handlers.
pub struct OpenAiChat {
    /// Underlying async-openai client.
    client: OpenAIClient<OpenAIConfig>,
    /// Model identifier sent with every completion.
    model:  String,
}

impl OpenAiChat {
    /// Builds a provider for the given endpoint, key, and model.
    pub fn new(api_base: &str, api_key: &str, model: &str) -> Self {
        let client = OpenAIClient::with_config(
            OpenAIConfig::new()
                .with_api_base(api_base)
                .with_api_key(api_key),
        );
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiChat {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ProviderError> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt.to_string())
                .build()?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(messages)
            .temperature(temperature)
            .n(1u8)
            .build()?;

        tracing::debug!(
            model = %self.model,
            temperature,
            prompt_len = prompt.len(),
            "executing chat completion"
        );

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}

/// Record of one call made to a [`ScriptedChat`].
#[derive(Debug, Clone)]
pub struct ScriptedCall {
    /// The rendered prompt that was sent.
    pub prompt:      String,
    /// The sampling temperature that was requested.
    pub temperature: f32,
}

/// Scripted provider for tests: returns queued responses in FIFO order and
/// records every call it receives.
#[derive(Default)]
pub struct ScriptedChat {
    /// Queued responses, consumed front to back.
    responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    /// Every call made so far, in order.
    calls:     Mutex<Vec<ScriptedCall>>,
}

impl ScriptedChat {
    /// Creates an empty scripted provider behind an `Arc` for sharing with a
    /// grader under test.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a successful completion.
    pub fn push_ok(&self, content: &str) {
        self.responses
            .lock()
            .expect("scripted responses poisoned")
            .push_back(Ok(content.to_string()));
    }

    /// Queues a backend failure.
    pub fn push_err(&self, message: &str) {
        self.responses
            .lock()
            .expect("scripted responses poisoned")
            .push_back(Err(ProviderError::Backend(message.to_string())));
    }

    /// Returns a snapshot of all calls made so far.
    pub fn calls(&self) -> Vec<ScriptedCall> {
        self.calls.lock().expect("scripted calls poisoned").clone()
    }

    /// Returns the number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("scripted calls poisoned").len()
    }
}

#[async_trait]
impl ChatProvider for ScriptedChat {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .expect("scripted calls poisoned")
            .push(ScriptedCall {
                prompt: prompt.to_string(),
                temperature,
            });

        self.responses
            .lock()
            .expect("scripted responses poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(ProviderError::Backend(
                    "no scripted response remaining".to_string(),
                ))
            })
    }
}
