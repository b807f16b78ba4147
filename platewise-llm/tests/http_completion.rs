//! End-to-end coverage for [`HttpCompletionProvider`] against a loopback
//! server that answers one request with a canned response.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use platewise_core::{CompletionError, CompletionProvider, CompletionRequest};
use platewise_llm::{CompletionConfig, HttpCompletionProvider};
use rstest::rstest;

/// Serve a single HTTP exchange, returning the server address and a channel
/// yielding the raw request text.
#[expect(clippy::expect_used, reason = "test server setup fails fast")]
fn serve_once(status_line: &'static str, body: &'static str) -> (SocketAddr, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        tx.send(request).expect("send captured request");
    });
    (addr, rx)
}

#[expect(clippy::expect_used, reason = "test server reads fail fast")]
fn read_request(stream: &mut impl Read) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let read = stream.read(&mut chunk).expect("read request");
        if read == 0 {
            break;
        }
        buffer.extend(chunk.iter().take(read));
        let text = String::from_utf8_lossy(&buffer).into_owned();
        if let Some((head, body)) = text.split_once("\r\n\r\n") {
            let expected = content_length(head);
            if body.len() >= expected {
                return text;
            }
        }
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

#[expect(clippy::expect_used, reason = "provider construction is infallible here")]
fn provider_for(addr: SocketAddr, timeout: Duration) -> HttpCompletionProvider {
    let config = CompletionConfig::new("gsk_test")
        .with_base_url(format!("http://{addr}/openai/v1"))
        .with_model("test-model")
        .with_timeout(timeout);
    HttpCompletionProvider::with_config(config).expect("provider should build")
}

fn ranking_request() -> CompletionRequest {
    CompletionRequest::new("Rank restaurants.", "Jalsa | Rating: 4.1")
}

#[rstest]
#[expect(clippy::expect_used, reason = "test asserts on success")]
fn returns_first_choice_and_sends_chat_request() {
    let (addr, captured) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":"[{\"name\":\"Jalsa\",\"rank\":1}]"}}]}"#,
    );
    let provider = provider_for(addr, Duration::from_secs(5));

    let text = provider.complete(&ranking_request()).expect("completion");

    assert_eq!(text, r#"[{"name":"Jalsa","rank":1}]"#);
    let request = captured.recv().expect("captured request");
    let lowered = request.to_lowercase();
    assert!(request.starts_with("POST /openai/v1/chat/completions "));
    assert!(lowered.contains("authorization: bearer gsk_test"));
    assert!(lowered.contains("user-agent: platewise/0.1"));
    assert!(request.contains(r#""model":"test-model""#));
    assert!(request.contains(r#""role":"system","content":"Rank restaurants.""#));
    assert!(request.contains(r#""role":"user","content":"Jalsa | Rating: 4.1""#));
}

#[rstest]
#[expect(clippy::expect_used, reason = "test asserts on failure")]
fn error_statuses_carry_the_body() {
    let (addr, _captured) = serve_once(
        "401 Unauthorized",
        r#"{"error":{"message":"Invalid API Key"}}"#,
    );
    let provider = provider_for(addr, Duration::from_secs(5));

    let err = provider.complete(&ranking_request()).expect_err("should fail");

    match err {
        CompletionError::Http {
            status, message, ..
        } => {
            assert_eq!(status, 401);
            assert!(message.contains("Invalid API Key"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[rstest]
#[expect(clippy::expect_used, reason = "test asserts on failure")]
fn undecodable_bodies_are_decode_errors() {
    let (addr, _captured) = serve_once("200 OK", "not json");
    let provider = provider_for(addr, Duration::from_secs(5));

    let err = provider.complete(&ranking_request()).expect_err("should fail");

    assert!(matches!(err, CompletionError::Decode { .. }));
}

#[rstest]
#[expect(clippy::expect_used, reason = "test asserts on failure")]
fn empty_choices_are_empty_responses() {
    let (addr, _captured) = serve_once("200 OK", r#"{"choices":[]}"#);
    let provider = provider_for(addr, Duration::from_secs(5));

    let err = provider.complete(&ranking_request()).expect_err("should fail");

    assert_eq!(err, CompletionError::EmptyResponse);
}

#[rstest]
#[expect(clippy::expect_used, reason = "test asserts on failure")]
fn refused_connections_are_network_errors() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        listener.local_addr().expect("listener address")
    };
    let provider = provider_for(addr, Duration::from_secs(5));

    let err = provider.complete(&ranking_request()).expect_err("should fail");

    assert!(matches!(err, CompletionError::Network { .. }), "got {err:?}");
}

#[rstest]
#[expect(clippy::expect_used, reason = "test asserts on failure")]
fn silent_servers_time_out() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    let provider = provider_for(addr, Duration::from_millis(300));

    let err = provider.complete(&ranking_request()).expect_err("should fail");

    assert!(matches!(err, CompletionError::Timeout { .. }), "got {err:?}");
    drop(listener);
}

#[tokio::test(flavor = "multi_thread")]
#[expect(clippy::expect_used, reason = "test asserts on success")]
async fn works_inside_a_multi_threaded_runtime() {
    let (addr, _captured) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"content":"[]"}}]}"#,
    );
    let provider = Arc::new(provider_for(addr, Duration::from_secs(5)));
    let worker = Arc::clone(&provider);

    let text = tokio::spawn(async move { worker.complete(&ranking_request()) })
        .await
        .expect("task should not panic")
        .expect("completion");

    assert_eq!(text, "[]");
    // The provider owns a runtime, which may only be dropped where blocking is allowed.
    tokio::task::spawn_blocking(move || drop(provider))
        .await
        .expect("provider drop should not panic");
}

#[tokio::test(flavor = "current_thread")]
#[expect(clippy::expect_used, reason = "test asserts on success")]
async fn works_inside_a_current_thread_runtime() {
    let (addr, captured) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"content":"[]"}}]}"#,
    );
    let provider = provider_for(addr, Duration::from_secs(5));

    let text = provider.complete(&ranking_request()).expect("completion");

    assert_eq!(text, "[]");
    assert!(captured.recv().expect("captured request").starts_with("POST "));
    tokio::task::spawn_blocking(move || drop(provider))
        .await
        .expect("provider drop should not panic");
}
