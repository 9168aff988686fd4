//! Exercises the client against a one-shot local HTTP responder.
//
//   cargo test -p voice_cloner_elevenlabs --test client
//

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use voice_cloner_domain::{
    AudioFormat, ModelId, RemoteError, SynthesisRequest, VoiceId, VoiceSample, VoiceService,
    VoiceSettings,
};
use voice_cloner_elevenlabs::{ClientConfig, ElevenLabsClient};

/// What the responder saw: lower-cased request head plus the raw body.
struct Captured {
    head: String,
    body: Vec<u8>,
}

/// Accept one connection, record the request, answer with `status` and `body`.
async fn serve_once(status: &'static str, body: &'static [u8]) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let head_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .map(|v| v.trim().parse::<usize>().unwrap());
        let chunked = head.contains("transfer-encoding: chunked");

        loop {
            let received = buf.len() - head_end;
            let done = match content_length {
                Some(len) => received >= len,
                None if chunked => buf.ends_with(b"0\r\n\r\n"),
                None => true,
            };
            if done {
                break;
            }
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.write_all(body).await.unwrap();
        socket.shutdown().await.unwrap();

        Captured {
            head,
            body: buf[head_end..].to_vec(),
        }
    });

    (base, handle)
}

fn client(base: &str) -> ElevenLabsClient {
    ElevenLabsClient::new_with_config("test-key", ClientConfig::default().with_base_url(base))
        .unwrap()
}

#[tokio::test]
async fn synthesize_posts_json_and_returns_audio() {
    let (base, server) = serve_once("200 OK", b"ID3-fake-mp3").await;

    let request = SynthesisRequest::new("Bonjour!", VoiceId::new("voice123"), ModelId::MonolingualV1)
        .with_settings(VoiceSettings::from_values(0.3, 0.9, 0.1))
        .with_format(AudioFormat::Mp3_44100_128);
    let audio = client(&base).synthesize(&request).await.unwrap();
    assert_eq!(audio, b"ID3-fake-mp3");

    let captured = server.await.unwrap();
    assert!(captured.head.starts_with(
        "post /v1/text-to-speech/voice123?output_format=mp3_44100_128 http/1.1"
    ));
    assert!(captured.head.contains("xi-api-key: test-key"));
    assert!(captured.head.contains("content-type: application/json"));

    let json: serde_json::Value = serde_json::from_slice(&captured.body).unwrap();
    assert_eq!(json["text"], "Bonjour!");
    assert_eq!(json["model_id"], "eleven_monolingual_v1");
    assert_eq!(json["voice_settings"]["use_speaker_boost"], true);
}

#[tokio::test]
async fn clone_uploads_multipart_sample() {
    let (base, server) =
        serve_once("200 OK", br#"{"voice_id":"new-voice","requires_verification":false}"#).await;

    let sample = VoiceSample::new("me.wav", b"RIFF-sample".to_vec());
    let id = client(&base).clone_voice(&sample, "My Voice").await.unwrap();
    assert_eq!(id, VoiceId::new("new-voice"));

    let captured = server.await.unwrap();
    assert!(captured.head.starts_with("post /v1/voices/add http/1.1"));
    assert!(captured.head.contains("multipart/form-data"));

    let body = String::from_utf8_lossy(&captured.body);
    assert!(body.contains("name=\"name\""));
    assert!(body.contains("My Voice"));
    assert!(body.contains("name=\"files\"; filename=\"me.wav\""));
    assert!(body.contains("audio/wav"));
    assert!(body.contains("RIFF-sample"));
}

#[tokio::test]
async fn unauthorized_status_maps_to_auth_error() {
    let (base, server) = serve_once(
        "401 Unauthorized",
        br#"{"detail":{"status":"invalid_api_key","message":"Invalid API key"}}"#,
    )
    .await;

    let request = SynthesisRequest::new("hi", VoiceId::new("v"), ModelId::default());
    let err = client(&base).synthesize(&request).await.unwrap_err();
    assert_eq!(err, RemoteError::Unauthorized("Invalid API key".into()));
    server.await.unwrap();
}

#[tokio::test]
async fn non_json_error_body_is_kept_verbatim() {
    let (base, server) = serve_once("502 Bad Gateway", b"upstream unavailable").await;

    let sample = VoiceSample::new("me.mp3", vec![0; 16]);
    let err = client(&base).clone_voice(&sample, "x").await.unwrap_err();
    assert_eq!(
        err,
        RemoteError::Rejected {
            status: 502,
            detail: "upstream unavailable".into()
        }
    );
    server.await.unwrap();
}

#[tokio::test]
async fn undecodable_clone_response_is_invalid() {
    let (base, server) = serve_once("200 OK", b"not json").await;

    let sample = VoiceSample::new("me.wav", vec![0; 16]);
    let err = client(&base).clone_voice(&sample, "x").await.unwrap_err();
    assert!(matches!(err, RemoteError::InvalidResponse(_)), "{err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let request = SynthesisRequest::new("hi", VoiceId::new("v"), ModelId::default());
    let err = client(&base).synthesize(&request).await.unwrap_err();
    assert!(matches!(err, RemoteError::Transport(_)), "{err:?}");
}
