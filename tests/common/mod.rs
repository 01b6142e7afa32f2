//! Loopback stand-in for the simulation service
//!
//! Answers every request with the same canned response and records what it
//! received, so tests can check both directions of the exchange.

#![allow(dead_code)]

use lolgpt::core::config::ServiceConfig;
use lolgpt::matchup::MatchService;
use lolgpt::remote::SimulationClient;
use lolgpt::tools::ToolRegistry;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl StubResponse {
    pub fn ok_json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: "{}".into(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub form: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

pub struct StubServer {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServer {
    pub async fn start(response: StubResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let captured = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&captured);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let sink = Arc::clone(&sink);
                let response = response.clone();
                tokio::spawn(async move {
                    // The client may hang up first (timeouts); that is fine
                    let _ = handle_connection(stream, response, sink).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    pub fn config(&self) -> ServiceConfig {
        ServiceConfig::default()
            .with_base_url_override(Some(self.base_url.clone()))
            .with_timeout(Duration::from_secs(5))
    }

    pub fn service(&self) -> MatchService {
        self.service_with_timeout(Duration::from_secs(5))
    }

    pub fn service_with_timeout(&self, timeout: Duration) -> MatchService {
        let config = self.config().with_timeout(timeout);
        MatchService::new(SimulationClient::new(&config).unwrap())
    }

    pub fn registry(&self) -> ToolRegistry {
        ToolRegistry::new(self.service())
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    response: StubResponse,
    sink: Arc<Mutex<Vec<CapturedRequest>>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut head_lines = head.split("\r\n");
    let request_line = head_lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    for line in head_lines {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            if name == "content-length" {
                content_length = value.trim().parse().unwrap_or(0);
            } else if name == "content-type" {
                content_type = Some(value.trim().to_string());
            }
        }
    }

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = &buf[header_end..buf.len().min(header_end + content_length)];
    let form = url::form_urlencoded::parse(body).into_owned().collect();
    sink.lock().unwrap().push(CapturedRequest {
        method,
        path,
        content_type,
        form,
    });

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    let reason = if response.status == 200 { "OK" } else { "Stub" };
    let reply = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    stream.write_all(reply.as_bytes()).await?;
    stream.shutdown().await
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
