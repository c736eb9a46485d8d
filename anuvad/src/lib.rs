//! Anuvad turns Nepali speech into translated text by composing two
//! remote calls: Gemini transcribes the audio, then one of three
//! interchangeable backends - Gemini, Ollama, or vLLM - translates the
//! transcript.
//!
//! The crate is deliberately thin. [`TranscriptionClient`] makes the
//! speech-to-text call; [`TranslationDispatcher`] hides the three
//! provider protocols behind one `translate` call; [`AudioTranslator`]
//! chains the two. Every call is stateless, makes exactly one attempt,
//! and surfaces failures as one of four inspectable [`Error`]
//! conditions.

pub mod audio;
pub mod error;
pub mod pipeline;
pub mod providers;
pub mod transcription;
pub mod translation;

pub use audio::AudioPayload;
pub use error::{Error, Result};
pub use pipeline::{AudioTranslator, Translation};
pub use providers::{Provider, ProviderConfig};
pub use transcription::TranscriptionClient;
pub use translation::{TranslationDispatcher, build_prompt};
