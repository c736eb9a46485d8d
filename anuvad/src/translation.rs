//! Translation dispatch across the supported providers.
//!
//! The dispatcher hides three incompatible wire protocols behind a
//! single call: it builds the fixed prompt, selects a backend once at
//! entry, and drives the request/response cycle through one shared
//! code path. Each call is stateless; no session or connection is held
//! open across calls, and no retry is ever attempted.

use crate::error::{Error, Result};
use crate::providers::{
    GeminiBackend, OllamaBackend, Provider, ProviderConfig, TranslationBackend, VllmBackend,
};
use serde_json::Value;
use tracing::{debug, instrument};

/// Build the fixed translation prompt.
///
/// The source language and quoting are not configurable; the output is
/// byte-for-byte deterministic for a given input pair, regardless of
/// which provider later receives it.
#[must_use]
pub fn build_prompt(text: &str, target_language: &str) -> String {
    format!("Translate the following Nepali text to {target_language}: \"{text}\"")
}

/// Routes translation requests to the configured provider backend.
///
/// # Example
///
/// ```rust,ignore
/// use anuvad::{Provider, ProviderConfig, TranslationDispatcher};
///
/// let dispatcher = TranslationDispatcher::new();
/// let config = ProviderConfig::gemini("AIza...");
/// let english = dispatcher
///     .translate("नमस्ते", "English", Provider::Gemini, &config)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct TranslationDispatcher {
    http_client: reqwest::Client,
    gemini: GeminiBackend,
    ollama: OllamaBackend,
    vllm: VllmBackend,
}

impl Default for TranslationDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationDispatcher {
    /// Create a dispatcher with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new dispatcher builder.
    #[must_use]
    pub fn builder() -> TranslationDispatcherBuilder {
        TranslationDispatcherBuilder::default()
    }

    /// Translate `text` into `target_language` via the selected provider.
    ///
    /// Exactly one backend executes per call; its configuration is
    /// validated before any network I/O, and one provider's failure mode
    /// never leaks into another's code path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a field the selected provider
    /// requires is empty, [`Error::Transport`] on network failure or a
    /// non-success status, and [`Error::UnexpectedResponseShape`] when
    /// the response body cannot be interpreted.
    #[instrument(skip(self, text, config), fields(provider = %provider))]
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
        provider: Provider,
        config: &ProviderConfig,
    ) -> Result<String> {
        let prompt = build_prompt(text, target_language);
        let backend: &dyn TranslationBackend = match provider {
            Provider::Gemini => &self.gemini,
            Provider::Ollama => &self.ollama,
            Provider::Vllm => &self.vllm,
        };
        self.dispatch(backend, &prompt, config).await
    }

    /// Drive one request/response cycle through the given backend.
    async fn dispatch(
        &self,
        backend: &dyn TranslationBackend,
        prompt: &str,
        config: &ProviderConfig,
    ) -> Result<String> {
        let provider = backend.provider();
        let url = backend.endpoint(config)?;
        let body = backend.build_request(prompt, config);

        debug!(provider = %provider, "sending translation request");

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| Error::transport(provider, &err))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::http_status(provider, status.as_u16(), error_text));
        }

        let text = response
            .text()
            .await
            .map_err(|err| Error::transport(provider, &err))?;
        let json: Value =
            serde_json::from_str(&text).map_err(|_| Error::shape_raw(provider, text))?;

        debug!(provider = %provider, response = %json, "translation response");

        backend.parse_response(json)
    }
}

/// Builder for [`TranslationDispatcher`].
#[derive(Debug, Default)]
pub struct TranslationDispatcherBuilder {
    gemini_base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl TranslationDispatcherBuilder {
    /// Override the Gemini API base URL.
    ///
    /// Ollama and vLLM URLs come from [`ProviderConfig`] per call.
    #[must_use]
    pub fn gemini_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini_base_url = Some(base_url.into());
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

    /// Build the dispatcher.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client fails to build.
    #[must_use]
    pub fn build(self) -> TranslationDispatcher {
        let gemini = self
            .gemini_base_url
            .map_or_else(GeminiBackend::new, GeminiBackend::with_base_url);

        TranslationDispatcher {
            http_client: build_http_client(self.timeout_secs),
            gemini,
            ollama: OllamaBackend,
            vllm: VllmBackend,
        }
    }
}

/// Build a reqwest client with an optional timeout.
pub(crate) fn build_http_client(timeout_secs: Option<u64>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(timeout));
    }

    builder.build().expect("Failed to build HTTP client")
}
