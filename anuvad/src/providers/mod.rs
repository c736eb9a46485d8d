//! Translation backend implementations for the supported provider APIs.
//!
//! This module provides a unified interface over three incompatible wire
//! protocols. Each backend implements the [`TranslationBackend`] trait,
//! so the dispatcher can select one at entry and drive the rest of the
//! call through a single code path.
//!
//! # Supported providers
//!
//! - **Gemini**: Google's managed generative API (`generateContent`)
//! - **Ollama**: a self-hosted completion server (`/api/generate`)
//! - **vLLM**: an OpenAI-compatible chat server (`/v1/chat/completions`)

mod gemini;
mod ollama;
mod vllm;

pub use gemini::{GEMINI_API_BASE_URL, GEMINI_MODEL, GeminiBackend};
pub use ollama::{DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL, OllamaBackend};
pub use vllm::{DEFAULT_VLLM_BASE_URL, VllmBackend};

pub(crate) use gemini::{extract_candidate_text, generate_content_url};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The closed set of translation providers.
///
/// Selecting a provider is the only branching the dispatcher performs;
/// everything after selection flows through [`TranslationBackend`].
/// Unrecognized provider names are rejected when parsing with
/// [`FromStr`], so a constructed `Provider` is always dispatchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Google's managed generative API.
    Gemini,
    /// Self-hosted Ollama completion server.
    Ollama,
    /// OpenAI-compatible vLLM chat server.
    Vllm,
}

impl Provider {
    /// Canonical provider name, as shown in errors and configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::Ollama => "Ollama",
            Self::Vllm => "vLLM",
        }
    }

    /// Read the provider selection from `TRANSLATION_MODEL_PROVIDER`.
    ///
    /// Defaults to [`Provider::Gemini`] when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedProvider`] if the variable holds an
    /// unrecognized name.
    pub fn from_env() -> Result<Self> {
        match std::env::var("TRANSLATION_MODEL_PROVIDER") {
            Ok(name) => name.parse(),
            Err(_) => Ok(Self::Gemini),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Gemini" | "gemini" => Ok(Self::Gemini),
            "Ollama" | "ollama" => Ok(Self::Ollama),
            "vLLM" | "vllm" | "VLLM" => Ok(Self::Vllm),
            other => Err(Error::UnsupportedProvider(other.to_string())),
        }
    }
}

/// Connection parameters for the translation providers.
///
/// Only the fields of the selected provider matter for a given call;
/// the backend validates presence at dispatch time, never earlier. A
/// field counts as missing when it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Gemini API key. Required when dispatching to [`Provider::Gemini`].
    pub api_key: String,
    /// Ollama server base URL.
    pub ollama_base_url: String,
    /// Ollama model name.
    pub ollama_model: String,
    /// vLLM server base URL.
    pub vllm_base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            vllm_base_url: DEFAULT_VLLM_BASE_URL.to_string(),
        }
    }
}

impl ProviderConfig {
    /// Configuration for Gemini with the given API key.
    #[must_use]
    pub fn gemini(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Configuration for an Ollama server at `base_url` serving `model`.
    #[must_use]
    pub fn ollama(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            ollama_base_url: base_url.into(),
            ollama_model: model.into(),
            ..Self::default()
        }
    }

    /// Configuration for a vLLM server at `base_url`.
    #[must_use]
    pub fn vllm(base_url: impl Into<String>) -> Self {
        Self {
            vllm_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read connection parameters from the environment.
    ///
    /// Honors `GEMINI_API_KEY`, `OLLAMA_BASE_URL`, `OLLAMA_MODEL_NAME`,
    /// and `VLLM_BASE_URL`, falling back to the documented defaults for
    /// any variable that is unset.
    #[must_use]
    pub fn from_env() -> Self {
        let or_default = |var: &str, default: &str| {
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        };
        Self {
            api_key: or_default("GEMINI_API_KEY", ""),
            ollama_base_url: or_default("OLLAMA_BASE_URL", DEFAULT_OLLAMA_BASE_URL),
            ollama_model: or_default("OLLAMA_MODEL_NAME", DEFAULT_OLLAMA_MODEL),
            vllm_base_url: or_default("VLLM_BASE_URL", DEFAULT_VLLM_BASE_URL),
        }
    }
}

/// The interface every translation backend satisfies.
///
/// A backend owns its provider's wire protocol and nothing else: it
/// validates the configuration it needs, shapes the request body, and
/// extracts the generated text from the response body. The HTTP round
/// trip itself lives in the dispatcher, shared by all backends.
pub trait TranslationBackend: Send + Sync {
    /// The provider this backend speaks for.
    fn provider(&self) -> Provider;

    /// Resolve the request URL, validating the configuration fields this
    /// provider requires.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a required field is empty. This is
    /// the only validation point; it runs before any network I/O.
    fn endpoint(&self, config: &ProviderConfig) -> Result<String>;

    /// Build the provider-specific JSON request body for `prompt`.
    fn build_request(&self, prompt: &str, config: &ProviderConfig) -> Value;

    /// Extract the generated text from the provider's response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedResponseShape`] when the body does not
    /// match the provider's documented shape. The Ollama backend is the
    /// documented exception: a missing `response` field maps to an empty
    /// string.
    fn parse_response(&self, body: Value) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_round_trip() {
        for provider in [Provider::Gemini, Provider::Ollama, Provider::Vllm] {
            assert_eq!(provider.as_str().parse::<Provider>().ok(), Some(provider));
        }
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let err = "Anthropic".parse::<Provider>().unwrap_err();
        match err {
            Error::UnsupportedProvider(name) => assert_eq!(name, "Anthropic"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = ProviderConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.ollama_base_url, "http://localhost:11434");
        assert_eq!(config.ollama_model, "llama2");
        assert_eq!(config.vllm_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_focused_constructors_keep_defaults() {
        let config = ProviderConfig::ollama("http://10.0.0.5:11434", "qwen2.5");
        assert_eq!(config.ollama_base_url, "http://10.0.0.5:11434");
        assert_eq!(config.ollama_model, "qwen2.5");
        assert_eq!(config.vllm_base_url, "http://localhost:8000");
        assert!(config.api_key.is_empty());
    }
}
