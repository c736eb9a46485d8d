//! Nepali speech transcription via the Gemini `generateContent` API.

use crate::audio::AudioPayload;
use crate::error::{Error, Result};
use crate::providers::{self, GEMINI_API_BASE_URL, Provider};
use crate::translation::build_http_client;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

/// The fixed instruction sent alongside every audio clip.
const TRANSCRIBE_INSTRUCTION: &str = "Transcribe the following Nepali audio to text:";

/// Client for transcribing Nepali audio to text.
///
/// Holds only the HTTP client and the endpoint base URL; the API key is
/// passed explicitly to each call, never stored.
///
/// # Example
///
/// ```rust,ignore
/// use anuvad::{AudioPayload, TranscriptionClient};
///
/// let client = TranscriptionClient::new();
/// let audio = AudioPayload::new(bytes, "audio/webm");
/// let nepali_text = client.transcribe(&audio, api_key).await?;
/// ```
#[derive(Debug, Clone)]
pub struct TranscriptionClient {
    http_client: reqwest::Client,
    base_url: Arc<str>,
}

impl Default for TranscriptionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptionClient {
    /// Create a client targeting the production Gemini API.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> TranscriptionClientBuilder {
        TranscriptionClientBuilder::default()
    }

    /// Transcribe an audio clip to Nepali text.
    ///
    /// The audio is base64-encoded inline into a single `generateContent`
    /// request tagged with its MIME type. Exactly one attempt is made.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `api_key` is empty,
    /// [`Error::Transport`] on network failure or a non-success status,
    /// and [`Error::UnexpectedResponseShape`] when the response does not
    /// carry a first candidate with a text part.
    #[instrument(skip(self, audio, api_key), fields(mime_type = %audio.mime_type()))]
    pub async fn transcribe(&self, audio: &AudioPayload, api_key: &str) -> Result<String> {
        if api_key.is_empty() {
            return Err(Error::config(
                Provider::Gemini,
                "Gemini API key is required for transcription",
            ));
        }

        let body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        { "text": TRANSCRIBE_INSTRUCTION },
                        {
                            "inlineData": {
                                "mimeType": audio.mime_type(),
                                "data": STANDARD.encode(audio.data())
                            }
                        }
                    ]
                }
            ]
        });
        let url = providers::generate_content_url(&self.base_url, api_key);

        debug!(audio_len = audio.data().len(), "sending transcription request");

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| Error::transport(Provider::Gemini, &err))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::http_status(
                Provider::Gemini,
                status.as_u16(),
                error_text,
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|err| Error::transport(Provider::Gemini, &err))?;
        let json: Value = serde_json::from_str(&text)
            .map_err(|_| Error::shape_raw(Provider::Gemini, text))?;

        debug!(response = %json, "transcription response");

        providers::extract_candidate_text(&json)
    }
}

/// Builder for [`TranscriptionClient`].
#[derive(Debug, Default)]
pub struct TranscriptionClientBuilder {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl TranscriptionClientBuilder {
    /// Override the Gemini API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout in seconds.
    ///
    /// Default is no application-level timeout; the transport's default
    /// applies.
    #[must_use]
    pub const fn timeout_secs(mut self, timeout: u64) -> Self {
        self.timeout_secs = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client fails to build.
    #[must_use]
    pub fn build(self) -> TranscriptionClient {
        let base_url = self
            .base_url
            .unwrap_or_else(|| GEMINI_API_BASE_URL.to_string());

        TranscriptionClient {
            http_client: build_http_client(self.timeout_secs),
            base_url: base_url.into(),
        }
    }
}
