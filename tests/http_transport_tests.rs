//! Wire-level tests for the reqwest-backed transport.
//!
//! These drive the real `HttpClient` against a local TCP listener and assert
//! on the raw request bytes: the bearer credential on every request, the
//! configured User-Agent, and the timeout setting.

use coinkit::error::TransportError;
use coinkit::http::{ApiTransport, HttpClient, HttpClientBuilder};
use serde_json::json;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::{Duration, Instant};

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Read one full HTTP request (head plus Content-Length body) as a string.
fn read_request(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);

        if let Some(head_end) = find_header_end(&data) {
            let head = String::from_utf8_lossy(&data[..head_end]);
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if data.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

/// Accept one connection, capture the request, answer with a JSON body.
fn spawn_server(listener: TcpListener, body: &'static str) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    })
}

fn local_listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    (listener, base)
}

#[tokio::test]
async fn get_request_carries_bearer_authorization() {
    let (listener, base) = local_listener();
    let handle = spawn_server(listener, r#"{"ok":true}"#);

    let client = HttpClient::new("test-key").unwrap();
    let value = client
        .get_json(&format!("{base}/prices"), &[("cryptos", "btc")])
        .await
        .unwrap();
    assert_eq!(value, json!({ "ok": true }));

    let request = handle.join().unwrap().to_lowercase();
    assert!(request.starts_with("get /prices?cryptos=btc http/1.1"));
    assert!(request.contains("authorization: bearer test-key"));
}

#[tokio::test]
async fn post_request_carries_bearer_authorization_and_json_body() {
    let (listener, base) = local_listener();
    let handle = spawn_server(listener, r#"{"ok":true}"#);

    let client = HttpClient::new("test-key").unwrap();
    let value = client
        .post_json(&format!("{base}/process"), &json!({ "amount": 2.5 }))
        .await
        .unwrap();
    assert_eq!(value, json!({ "ok": true }));

    let request = handle.join().unwrap();
    let lowered = request.to_lowercase();
    assert!(lowered.starts_with("post /process http/1.1"));
    assert!(lowered.contains("authorization: bearer test-key"));
    assert!(lowered.contains("content-type: application/json"));
    assert!(request.contains(r#"{"amount":2.5}"#));
}

#[tokio::test]
async fn configured_user_agent_is_sent() {
    let (listener, base) = local_listener();
    let handle = spawn_server(listener, "{}");

    let client = HttpClientBuilder::new("test-key")
        .user_agent("coinkit-tests/1.0")
        .build()
        .unwrap();
    client.get_json(&format!("{base}/rates"), &[]).await.unwrap();

    let request = handle.join().unwrap().to_lowercase();
    assert!(request.contains("user-agent: coinkit-tests/1.0"));
}

#[tokio::test]
async fn configured_timeout_aborts_slow_requests() {
    let (listener, base) = local_listener();
    // Accept the request but never answer; the stream stays open well past
    // the client's deadline.
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let _ = read_request(&mut stream);
        thread::sleep(Duration::from_secs(10));
    });

    let client = HttpClientBuilder::new("test-key")
        .timeout(1)
        .build()
        .unwrap();

    let started = Instant::now();
    let err = client
        .get_json(&format!("{base}/slow"), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
    assert!(started.elapsed() < Duration::from_secs(5));
}
