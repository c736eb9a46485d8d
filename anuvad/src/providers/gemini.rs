//! Gemini translation backend.
//!
//! Speaks the `generateContent` protocol of Google's generative language
//! API. The transcription client reuses this module's URL construction
//! and response extraction, since both operations hit the same endpoint
//! and share the same strict response contract.

use super::{Provider, ProviderConfig, TranslationBackend};
use crate::error::{Error, Result};
use serde_json::{Value, json};
use std::sync::Arc;

/// Default base URL of the generative language API.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The fixed model every call targets.
pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Build the `generateContent` URL, with the API key as a query parameter.
pub(crate) fn generate_content_url(base_url: &str, api_key: &str) -> String {
    format!("{base_url}/{GEMINI_MODEL}:generateContent?key={api_key}")
}

/// Extract the first generated text fragment from a `generateContent`
/// response.
///
/// The contract is strict: the candidate list, its first entry's content,
/// the parts list, and the first part's `text` must all be present. A
/// partial or malformed body is never coerced into an empty string.
pub(crate) fn extract_candidate_text(body: &Value) -> Result<String> {
    body.get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| Error::shape(Provider::Gemini, body))
}

/// Translation backend for the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    base_url: Arc<str>,
}

impl Default for GeminiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiBackend {
    /// Create a backend targeting the production API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: GEMINI_API_BASE_URL.into(),
        }
    }

    /// Create a backend targeting a custom base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().into(),
        }
    }
}

impl TranslationBackend for GeminiBackend {
    fn provider(&self) -> Provider {
        Provider::Gemini
    }

    fn endpoint(&self, config: &ProviderConfig) -> Result<String> {
        if config.api_key.is_empty() {
            return Err(Error::config(
                Provider::Gemini,
                "Gemini API key is required for translation",
            ));
        }
        Ok(generate_content_url(&self.base_url, &config.api_key))
    }

    fn build_request(&self, prompt: &str, _config: &ProviderConfig) -> Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ]
        })
    }

    fn parse_response(&self, body: Value) -> Result<String> {
        extract_candidate_text(&body)
    }
}
