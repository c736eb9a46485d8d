//! Audio payload passed to the transcription client.

use bytes::Bytes;

/// A caller-owned audio clip: raw bytes plus their MIME type.
///
/// The payload is immutable and cheap to clone; it lives for the
/// duration of a single transcription call.
#[derive(Clone, PartialEq, Eq)]
pub struct AudioPayload {
    data: Bytes,
    mime_type: String,
}

impl std::fmt::Debug for AudioPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioPayload")
            .field("len", &self.data.len())
            .field("mime_type", &self.mime_type)
            .finish()
    }
}

impl AudioPayload {
    /// Create a payload from raw audio bytes and their MIME type
    /// (e.g. `audio/webm`, `audio/mp3`).
    pub fn new(data: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// The raw audio bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The MIME type of the audio.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let payload = AudioPayload::new(vec![0x00, 0x01], "audio/webm");
        assert_eq!(payload.data(), &[0x00, 0x01]);
        assert_eq!(payload.mime_type(), "audio/webm");
    }

    #[test]
    fn test_debug_shows_length_not_contents() {
        let payload = AudioPayload::new(vec![1; 1024], "audio/mp3");
        let rendered = format!("{payload:?}");
        assert!(rendered.contains("1024"));
        assert!(rendered.contains("audio/mp3"));
    }
}
