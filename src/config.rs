#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Process-wide configuration, read from the environment once and shared
//! behind a cheap cloneable handle.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, OnceLock},
};

use anyhow::{Context, Result};

/// Default bind address for the HTTP service.
const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Default OpenAI-compatible API endpoint.
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model identifier for both classification and grading calls.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI credentials and model selection sourced from the environment.
#[derive(Clone)]
pub struct OpenAiEnv {
    /// Base URL for the OpenAI-compatible API endpoint.
    api_base: String,
    /// API key used to authenticate requests.
    api_key:  String,
    /// Model identifier for chat completions.
    model:    String,
}

impl OpenAiEnv {
    /// Construct an `OpenAiEnv` from environment variables; returns `None`
    /// when no API key is configured.
    fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok()?.trim().to_owned();
        if api_key.is_empty() {
            return None;
        }

        let api_base = std::env::var("OPENAI_ENDPOINT")
            .map(|value| value.trim().to_owned())
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = std::env::var("OPENAI_MODEL")
            .map(|value| value.trim().to_owned())
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Some(Self {
            api_base,
            api_key,
            model,
        })
    }

    /// Returns the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Runtime configuration shared across the crate.
pub struct ConfigState {
    /// Cached OpenAI configuration, if available.
    openai:             Option<OpenAiEnv>,
    /// Address the HTTP service binds to.
    bind_addr:          SocketAddr,
    /// Whether the AI classifier refinement step is enabled.
    refinement_enabled: bool,
}

impl ConfigState {
    /// Construct a new configuration instance by reading the environment.
    fn new() -> Result<Self> {
        let bind_addr = std::env::var("GRADEGENIUS_BIND")
            .map(|value| value.trim().to_owned())
            .unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Could not parse bind address `{bind_addr}`"))?;

        let refinement_enabled = std::env::var("GRADEGENIUS_REFINEMENT")
            .ok()
            .and_then(|value| value.trim().parse::<bool>().ok())
            .unwrap_or(true);

        Ok(Self {
            openai: OpenAiEnv::from_env(),
            bind_addr,
            refinement_enabled,
        })
    }

    /// Returns the OpenAI configuration, if an API key is present.
    pub fn openai(&self) -> Option<&OpenAiEnv> {
        self.openai.as_ref()
    }

    /// Returns the address the HTTP service binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Returns whether the AI classifier refinement step is enabled.
    pub fn refinement_enabled(&self) -> bool {
        self.refinement_enabled
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Ensure the global configuration has been initialized and return a handle.
pub fn ensure_initialized() -> Result<ConfigHandle> {
    let slot = slot();
    let mut guard = slot.lock().expect("config slot poisoned");
    if let Some(cfg) = guard.as_ref() {
        return Ok(ConfigHandle(Arc::clone(cfg)));
    }

    let cfg = ConfigState::new().map(Arc::new)?;
    *guard = Some(Arc::clone(&cfg));
    Ok(ConfigHandle(cfg))
}
