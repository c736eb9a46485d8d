//! Ollama translation backend.
//!
//! Speaks the plain completion protocol of a self-hosted Ollama server
//! (`/api/generate`), always with streaming disabled.

use super::{Provider, ProviderConfig, TranslationBackend};
use crate::error::{Error, Result};
use serde_json::{Value, json};

/// Default Ollama server URL (local install).
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Default Ollama model name.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama2";

/// Translation backend for Ollama's `/api/generate` endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct OllamaBackend;

impl TranslationBackend for OllamaBackend {
    fn provider(&self) -> Provider {
        Provider::Ollama
    }

    fn endpoint(&self, config: &ProviderConfig) -> Result<String> {
        if config.ollama_base_url.is_empty() || config.ollama_model.is_empty() {
            return Err(Error::config(
                Provider::Ollama,
                "Ollama base URL and model name are required for translation",
            ));
        }
        Ok(format!("{}/api/generate", config.ollama_base_url))
    }

    fn build_request(&self, prompt: &str, config: &ProviderConfig) -> Value {
        json!({
            "model": config.ollama_model,
            "prompt": prompt,
            "stream": false
        })
    }

    /// A missing `response` field maps to an empty string rather than a
    /// shape error, unlike the other backends. Tightening this to match
    /// them is an open product question.
    fn parse_response(&self, body: Value) -> Result<String> {
        Ok(body
            .get("response")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_requires_base_url_and_model() {
        let backend = OllamaBackend;

        let mut config = ProviderConfig::default();
        config.ollama_model.clear();
        let err = backend.endpoint(&config).unwrap_err();
        assert!(matches!(
            err,
            Error::Config {
                provider: Provider::Ollama,
                ..
            }
        ));

        let mut config = ProviderConfig::default();
        config.ollama_base_url.clear();
        assert!(backend.endpoint(&config).is_err());
    }

    #[test]
    fn test_endpoint_appends_generate_path() {
        let backend = OllamaBackend;
        let url = backend
            .endpoint(&ProviderConfig::ollama("http://localhost:11434", "llama2"))
            .unwrap();
        assert_eq!(url, "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_build_request_disables_streaming() {
        let backend = OllamaBackend;
        let config = ProviderConfig::ollama("http://localhost:11434", "llama2");
        let body = backend.build_request("prompt", &config);
        assert_eq!(body["model"], "llama2");
        assert_eq!(body["prompt"], "prompt");
        assert_eq!(body["stream"], false);
    }

    #[test]
    fn test_parse_returns_response_field() {
        let backend = OllamaBackend;
        let body = json!({ "response": "Hello", "done": true });
        assert_eq!(backend.parse_response(body).unwrap(), "Hello");
    }

    #[test]
    fn test_parse_degrades_missing_field_to_empty_string() {
        let backend = OllamaBackend;
        assert_eq!(backend.parse_response(json!({})).unwrap(), "");
        assert_eq!(backend.parse_response(json!({ "response": 42 })).unwrap(), "");
    }
}
