use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use voiceloop::{
    Assistant, ChatClient, ChatMessage, ElevenLabsMouth, OpenAiClient, Transcriber,
    VoiceLoopError, WhisperTranscriber,
};

#[tokio::test]
async fn chat_completion_returns_first_choice() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({
            "choices": [{"message": {"role": "assistant", "content": "Hi there."}}]
        }));
    });

    let client = OpenAiClient::new(server.base_url(), "test-key");
    let reply = client
        .complete(&[ChatMessage::user("hello")])
        .await
        .unwrap();
    assert_eq!(reply, "Hi there.");
    mock.assert();
}

#[tokio::test]
async fn chat_error_status_surfaces_as_chat_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(429).body("quota exceeded");
    });

    let client = OpenAiClient::new(server.base_url(), "test-key");
    let err = client
        .complete(&[ChatMessage::user("hello")])
        .await
        .unwrap_err();
    match err {
        VoiceLoopError::Chat(msg) => assert!(msg.contains("quota exceeded"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn embeddings_are_parsed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/embeddings");
        then.status(200)
            .json_body(json!({"data": [{"embedding": [0.1, 0.2, 0.3]}]}));
    });

    let client = OpenAiClient::new(server.base_url(), "test-key");
    let vector = client.embed("payroll policy").await.unwrap();
    assert_eq!(vector, vec![0.1, 0.2, 0.3]);
}

#[tokio::test]
async fn transcription_posts_multipart_and_returns_text() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/audio/transcriptions");
        then.status(200)
            .json_body(json!({"text": "how many employees do we have"}));
    });

    let transcriber = WhisperTranscriber::new(server.base_url(), "test-key");
    let text = transcriber
        .transcribe(vec![0u8; 128], "clip.wav")
        .await
        .unwrap();
    assert_eq!(text, "how many employees do we have");
    mock.assert();
}

#[tokio::test]
async fn synthesis_returns_audio_bytes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/v1/text-to-speech/voice-1")
            .header("xi-api-key", "el-key");
        then.status(200).body(&[1u8, 2, 3, 4][..]);
    });

    let mouth = ElevenLabsMouth::new(server.base_url(), "el-key", "voice-1");
    let audio = mouth.synthesize("hello team").await.unwrap();
    assert_eq!(audio, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn unmatched_utterance_goes_to_the_chat_service_with_context() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .body_contains("247 employees");
        then.status(200).json_body(json!({
            "choices": [{"message": {"role": "assistant", "content": "Here's what I think."}}]
        }));
    });

    let client = Arc::new(OpenAiClient::new(server.base_url(), "test-key"));
    let mut assistant = Assistant::new(10).chat_client(client);
    let reply = assistant
        .handle_utterance("summarize our quarterly attrition numbers")
        .await
        .unwrap();
    assert_eq!(reply, "Here's what I think.");
    mock.assert();
}

#[tokio::test]
async fn chat_failure_becomes_a_polite_line_in_the_log() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(500).body("boom");
    });

    let client = Arc::new(OpenAiClient::new(server.base_url(), "test-key"));
    let mut assistant = Assistant::new(10).chat_client(client);
    let reply = assistant.handle_utterance("zzqqy unmatched").await.unwrap();
    assert!(reply.contains("couldn't reach"), "{reply}");
    // The failure line is still appended to the conversation.
    assert_eq!(assistant.conversation().full().last().unwrap().content, reply);
}
