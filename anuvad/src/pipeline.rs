//! Transcribe-then-translate pipeline.
//!
//! A thin facade over [`TranscriptionClient`] and
//! [`TranslationDispatcher`]: the two calls compose strictly
//! sequentially, the translation input being the transcription output.
//! The first failure propagates; nothing is retried.

use crate::audio::AudioPayload;
use crate::error::Result;
use crate::providers::{Provider, ProviderConfig};
use crate::transcription::TranscriptionClient;
use crate::translation::TranslationDispatcher;
use serde::{Deserialize, Serialize};

/// The outcome of one pipeline run: the Nepali transcript and its
/// translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// The transcribed Nepali text.
    pub source_text: String,
    /// The translated text.
    pub translated_text: String,
}

/// Composes transcription and translation into one call.
///
/// # Example
///
/// ```rust,ignore
/// use anuvad::{AudioPayload, AudioTranslator, Provider, ProviderConfig};
///
/// let translator = AudioTranslator::new();
/// let audio = AudioPayload::new(bytes, "audio/webm");
/// let config = ProviderConfig::gemini(api_key);
/// let result = translator
///     .transcribe_and_translate(&audio, api_key, "English", Provider::Gemini, &config)
///     .await?;
/// println!("{} -> {}", result.source_text, result.translated_text);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AudioTranslator {
    transcription: TranscriptionClient,
    dispatcher: TranslationDispatcher,
}

impl AudioTranslator {
    /// Create a translator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new translator builder.
    #[must_use]
    pub fn builder() -> AudioTranslatorBuilder {
        AudioTranslatorBuilder::default()
    }

    /// Transcribe `audio` and translate the transcript.
    ///
    /// # Errors
    ///
    /// Propagates the first failing stage's error unchanged; see
    /// [`TranscriptionClient::transcribe`] and
    /// [`TranslationDispatcher::translate`].
    pub async fn transcribe_and_translate(
        &self,
        audio: &AudioPayload,
        api_key: &str,
        target_language: &str,
        provider: Provider,
        config: &ProviderConfig,
    ) -> Result<Translation> {
        let source_text = self.transcription.transcribe(audio, api_key).await?;
        let translated_text = self
            .dispatcher
            .translate(&source_text, target_language, provider, config)
            .await?;

        Ok(Translation {
            source_text,
            translated_text,
        })
    }

    /// The underlying transcription client.
    #[must_use]
    pub const fn transcription(&self) -> &TranscriptionClient {
        &self.transcription
    }

    /// The underlying translation dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &TranslationDispatcher {
        &self.dispatcher
    }
}

/// Builder for [`AudioTranslator`].
#[derive(Debug, Default)]
pub struct AudioTranslatorBuilder {
    gemini_base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl AudioTranslatorBuilder {
    /// Override the Gemini API base URL for both stages.
    #[must_use]
    pub fn gemini_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini_base_url = Some(base_url.into());
        self
    }

    /// Set the per-request timeout in seconds for both stages.
    #[must_use]
    pub const fn timeout_secs(mut self, timeout: u64) -> Self {
        self.timeout_secs = Some(timeout);
        self
    }

    /// Build the translator.
    #[must_use]
    pub fn build(self) -> AudioTranslator {
        let mut transcription = TranscriptionClient::builder();
        let mut dispatcher = TranslationDispatcher::builder();

        if let Some(base_url) = self.gemini_base_url {
            transcription = transcription.base_url(base_url.clone());
            dispatcher = dispatcher.gemini_base_url(base_url);
        }
        if let Some(timeout) = self.timeout_secs {
            transcription = transcription.timeout_secs(timeout);
            dispatcher = dispatcher.timeout_secs(timeout);
        }

        AudioTranslator {
            transcription: transcription.build(),
            dispatcher: dispatcher.build(),
        }
    }
}
