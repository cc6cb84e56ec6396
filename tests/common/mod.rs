//! Shared test utilities: in-process mock HTTP and WebSocket servers.

#![allow(dead_code)]

use std::future::Future;
use std::sync::{Arc, Mutex};

use stockfighter::{Config, Instance, TradingContext};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::WebSocketStream;
use tungstenite::handshake::server::{ErrorResponse, Request, Response};

pub const ACCOUNT: &str = "EXB123456";
pub const VENUE: &str = "TESTEX";
pub const SYMBOL: &str = "FOOBAR";
pub const API_KEY: &str = "test-key";

/// A request as seen by the mock HTTP server.
#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// Looks up a header case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Serves exactly one HTTP request with the given status line and body.
///
/// Returns the server root URL (`http://127.0.0.1:port/`) and a handle that
/// resolves to the recorded request.
pub async fn serve_http(status: &str, body: &str) -> (String, JoinHandle<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind http");
    let addr = listener.local_addr().expect("http addr");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept http");
        let request = read_request(&mut stream).await;
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = stream.shutdown().await;
        request
    });

    (format!("http://{addr}/"), handle)
}

async fn read_request(stream: &mut TcpStream) -> RecordedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = stream.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break buf.len();
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split(' ');
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.expect("read body");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    RecordedRequest {
        method,
        path,
        headers,
        body,
    }
}

/// Returns a URL root nothing is listening on.
pub async fn unused_root(scheme: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("{scheme}://{addr}/")
}

/// What the mock WebSocket server saw during the handshake.
#[derive(Debug, Clone, Default)]
pub struct Handshake {
    pub path: String,
    pub auth: Option<String>,
}

/// Accepts one WebSocket connection and hands it to `script`.
///
/// Returns the server root URL (`ws://127.0.0.1:port/`) and a handle that
/// resolves to the handshake details once the script finishes.
pub async fn serve_ws<F, Fut>(script: F) -> (String, JoinHandle<Handshake>)
where
    F: FnOnce(WebSocketStream<TcpStream>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ws");
    let addr = listener.local_addr().expect("ws addr");

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept ws");

        let captured = Arc::new(Mutex::new(Handshake::default()));
        let sink = Arc::clone(&captured);
        let callback = move |req: &Request, resp: Response| -> Result<Response, ErrorResponse> {
            let mut handshake = sink.lock().unwrap();
            handshake.path = req.uri().path().to_string();
            handshake.auth = req
                .headers()
                .get("x-starfighter-authorization")
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            Ok(resp)
        };

        let ws = tokio_tungstenite::accept_hdr_async(stream, callback)
            .await
            .expect("ws handshake");
        script(ws).await;

        let handshake = captured.lock().unwrap().clone();
        handshake
    });

    (format!("ws://{addr}/"), handle)
}

/// Builds an instance pointed at mock servers with the standard test context.
pub fn instance(rest_root: &str, ws_root: &str) -> Instance {
    let config = Config::with_api_key(API_KEY)
        .base_url(format!("{rest_root}ob/api/"))
        .ws_url(format!("{ws_root}ob/api/ws/"))
        .gm_url(format!("{rest_root}gm/"));
    let instance = Instance::with_config(config).expect("build instance");
    instance.set_context(TradingContext::new(ACCOUNT, VENUE, SYMBOL));
    instance
}

/// Instance for REST-only tests.
pub fn rest_instance(rest_root: &str) -> Instance {
    instance(rest_root, "ws://127.0.0.1:9/")
}

/// Instance for stream-only tests.
pub fn ws_instance(ws_root: &str) -> Instance {
    instance("http://127.0.0.1:9/", ws_root)
}
