//! vLLM translation backend.
//!
//! Speaks the OpenAI-compatible chat protocol exposed by a vLLM server
//! (`/v1/chat/completions`). The model name is fixed to `"default"`;
//! vLLM serves a single model per instance.

use super::{Provider, ProviderConfig, TranslationBackend};
use crate::error::{Error, Result};
use serde_json::{Value, json};

/// Default vLLM server URL (local install).
pub const DEFAULT_VLLM_BASE_URL: &str = "http://localhost:8000";

/// Translation backend for vLLM's OpenAI-compatible chat endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct VllmBackend;

impl TranslationBackend for VllmBackend {
    fn provider(&self) -> Provider {
        Provider::Vllm
    }

    fn endpoint(&self, config: &ProviderConfig) -> Result<String> {
        if config.vllm_base_url.is_empty() {
            return Err(Error::config(
                Provider::Vllm,
                "vLLM base URL is required for translation",
            ));
        }
        Ok(format!("{}/v1/chat/completions", config.vllm_base_url))
    }

    fn build_request(&self, prompt: &str, _config: &ProviderConfig) -> Value {
        json!({
            "model": "default",
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": 0.7,
            "max_tokens": 150
        })
    }

    fn parse_response(&self, body: Value) -> Result<String> {
        body.get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| Error::shape(Provider::Vllm, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_requires_base_url() {
        let backend = VllmBackend;
        let mut config = ProviderConfig::default();
        config.vllm_base_url.clear();
        let err = backend.endpoint(&config).unwrap_err();
        assert!(matches!(
            err,
            Error::Config {
                provider: Provider::Vllm,
                ..
            }
        ));
    }

    #[test]
    fn test_endpoint_appends_chat_completions_path() {
        let backend = VllmBackend;
        let url = backend
            .endpoint(&ProviderConfig::vllm("http://localhost:8000"))
            .unwrap();
        assert_eq!(url, "http://localhost:8000/v1/chat/completions");
    }

    #[test]
    fn test_build_request_uses_fixed_sampling_parameters() {
        let backend = VllmBackend;
        let body = backend.build_request("prompt", &ProviderConfig::default());
        assert_eq!(body["model"], "default");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "prompt");
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["max_tokens"], 150);
    }

    #[test]
    fn test_parse_extracts_first_choice_message() {
        let backend = VllmBackend;
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Hello" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        });
        assert_eq!(backend.parse_response(body).unwrap(), "Hello");
    }

    #[test]
    fn test_parse_rejects_empty_body_and_empty_choices() {
        let backend = VllmBackend;
        assert!(matches!(
            backend.parse_response(json!({})).unwrap_err(),
            Error::UnexpectedResponseShape {
                provider: Provider::Vllm,
                ..
            }
        ));
        assert!(backend.parse_response(json!({ "choices": [] })).is_err());
        assert!(
            backend
                .parse_response(json!({ "choices": [{ "message": {} }] }))
                .is_err()
        );
    }
}
