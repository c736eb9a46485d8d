//! Error types for transcription and translation calls.
//!
//! Every failure surfaces as one of four distinct, inspectable conditions:
//!
//! - [`Error::Config`] - a required credential or endpoint is missing;
//!   prompting for configuration is the only remedy, retrying is not.
//! - [`Error::Transport`] - the network failed or the remote returned a
//!   non-success HTTP status; the caller may retry, this crate never does.
//! - [`Error::UnexpectedResponseShape`] - the remote returned a body the
//!   adapter cannot interpret; the raw body is kept for diagnostics.
//! - [`Error::UnsupportedProvider`] - a provider name outside the
//!   supported set was given.

use crate::providers::Provider;

/// Result type alias for anuvad operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all transcription and translation operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A credential or endpoint required by the selected provider is missing.
    #[error("[{provider}] configuration error: {message}")]
    Config {
        /// The provider whose configuration is incomplete.
        provider: Provider,
        /// What is missing.
        message: String,
    },

    /// Network failure or non-success HTTP status from the remote API.
    #[error("[{provider}] transport error: {message}")]
    Transport {
        /// The provider whose endpoint failed.
        provider: Provider,
        /// Description of the failure.
        message: String,
        /// HTTP status code, when the remote answered at all.
        status: Option<u16>,
        /// Raw response body, when one was received.
        body: Option<String>,
    },

    /// The remote API answered 2xx with a body the adapter cannot interpret.
    #[error("[{provider}] unexpected response shape: {body}")]
    UnexpectedResponseShape {
        /// The provider that produced the body.
        provider: Provider,
        /// The raw response body, kept verbatim for diagnostics.
        body: String,
    },

    /// A provider name outside the supported set.
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),
}

impl Error {
    /// Create a configuration error for the given provider.
    #[must_use]
    pub fn config(provider: Provider, message: impl Into<String>) -> Self {
        Self::Config {
            provider,
            message: message.into(),
        }
    }

    /// Create a transport error from a failed HTTP round trip.
    #[must_use]
    pub fn transport(provider: Provider, err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        Self::Transport {
            provider,
            message,
            status: err.status().map(|s| s.as_u16()),
            body: None,
        }
    }

    /// Create a transport error for a non-success HTTP status.
    #[must_use]
    pub fn http_status(provider: Provider, status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::Transport {
            provider,
            message: format!("HTTP {status}"),
            status: Some(status),
            body: Some(body),
        }
    }

    /// Create an unexpected-response-shape error, keeping the raw body.
    #[must_use]
    pub fn shape(provider: Provider, body: &serde_json::Value) -> Self {
        Self::UnexpectedResponseShape {
            provider,
            body: body.to_string(),
        }
    }

    /// Create an unexpected-response-shape error from a non-JSON body.
    #[must_use]
    pub fn shape_raw(provider: Provider, body: impl Into<String>) -> Self {
        Self::UnexpectedResponseShape {
            provider,
            body: body.into(),
        }
    }

    /// The provider that triggered this error, if one was involved.
    #[must_use]
    pub const fn provider(&self) -> Option<Provider> {
        match self {
            Self::Config { provider, .. }
            | Self::Transport { provider, .. }
            | Self::UnexpectedResponseShape { provider, .. } => Some(*provider),
            Self::UnsupportedProvider(_) => None,
        }
    }

    /// Check whether retrying the same call could succeed.
    ///
    /// Only transport failures are transient; the other conditions require
    /// a configuration or code change first.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
