//! Integration tests for the transcription client against a mocked
//! `generateContent` endpoint.

use anuvad::{AudioPayload, Error, Provider, TranscriptionClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TranscriptionClient {
    TranscriptionClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn transcribes_audio_to_nepali_text() {
    let server = MockServer::start().await;

    // b"\x00\x01" encodes to "AAE=".
    Mock::given(method("POST"))
        .and(path("/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_json(json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        { "text": "Transcribe the following Nepali audio to text:" },
                        { "inlineData": { "mimeType": "audio/webm", "data": "AAE=" } }
                    ]
                }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "नमस्ते" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let audio = AudioPayload::new(vec![0x00, 0x01], "audio/webm");

    let text = client.transcribe(&audio, "test-key").await.unwrap();
    assert_eq!(text, "नमस्ते");
}

#[tokio::test]
async fn empty_api_key_fails_without_a_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let audio = AudioPayload::new(vec![0x00, 0x01], "audio/webm");

    let err = client.transcribe(&audio, "").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Config {
            provider: Provider::Gemini,
            ..
        }
    ));
}

#[tokio::test]
async fn malformed_response_is_never_coerced_to_empty_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let audio = AudioPayload::new(vec![0x00, 0x01], "audio/webm");

    let err = client.transcribe(&audio, "test-key").await.unwrap_err();
    match err {
        Error::UnexpectedResponseShape { provider, body } => {
            assert_eq!(provider, Provider::Gemini);
            assert!(body.contains("candidates"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_shape_error_with_the_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let audio = AudioPayload::new(vec![0x00, 0x01], "audio/webm");

    let err = client.transcribe(&audio, "test-key").await.unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedResponseShape { body, .. } if body.contains("proxy error")
    ));
}

#[tokio::test]
async fn http_error_status_surfaces_as_transport() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("key rejected"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let audio = AudioPayload::new(vec![0x00, 0x01], "audio/webm");

    let err = client.transcribe(&audio, "bad-key").await.unwrap_err();
    match err {
        Error::Transport {
            provider,
            status,
            body,
            ..
        } => {
            assert_eq!(provider, Provider::Gemini);
            assert_eq!(status, Some(403));
            assert_eq!(body.as_deref(), Some("key rejected"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
