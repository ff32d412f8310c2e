//! In-process HTTP stub for exercising the API client.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use oz_streamer::config::ApiConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A canned response.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

/// A request the stub received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

type Routes = Arc<Mutex<HashMap<(String, String), StubResponse>>>;
type Requests = Arc<Mutex<Vec<Recorded>>>;

/// Serves canned responses keyed by method and request target.
pub struct StubServer {
    base_url: String,
    routes: Routes,
    requests: Requests,
}

impl StubServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let routes: Routes = Arc::default();
        let requests: Requests = Arc::default();

        let (r, q) = (routes.clone(), requests.clone());
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let (r, q) = (r.clone(), q.clone());
                tokio::spawn(async move {
                    let _ = handle(socket, r, q).await;
                });
            }
        });

        Self {
            base_url,
            routes,
            requests,
        }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// API config with both base URLs on this stub.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            core_url: self.base_url.clone(),
            catalog_url: format!("{}/cdn", self.base_url),
            ..ApiConfig::default()
        }
    }

    pub fn route(&self, method: &str, target: &str, status: u16, body: &str) {
        self.route_with_headers(method, target, status, body, &[]);
    }

    pub fn route_with_headers(
        &self,
        method: &str,
        target: &str,
        status: u16,
        body: &str,
        headers: &[(&str, &str)],
    ) {
        self.routes.lock().unwrap().insert(
            (method.to_string(), target.to_string()),
            StubResponse {
                status,
                body: body.to_string(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
        );
    }

    /// Token endpoint answering with a token valid for `expires_in_ms`.
    pub fn route_token(&self, token: &str, expires_in_ms: u64) {
        self.route(
            "POST",
            "/oauth2/token",
            200,
            &format!(
                r#"{{"access_token":"{}","expires_in":{}}}"#,
                token, expires_in_ms
            ),
        );
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests received for `method` and `target`.
    pub fn hits(&self, method: &str, target: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.target == target)
            .collect()
    }

    pub fn token_requests(&self) -> usize {
        self.hits("POST", "/oauth2/token").len()
    }
}

async fn handle(mut socket: TcpStream, routes: Routes, requests: Requests) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let target = request_line.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length: usize = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        target: target.clone(),
        headers,
        body,
    });

    let response = routes
        .lock()
        .unwrap()
        .get(&(method, target))
        .cloned()
        .unwrap_or(StubResponse {
            status: 404,
            body: r#"{"error":"not found"}"#.to_string(),
            headers: Vec::new(),
        });

    let mut raw = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        response.status,
        if response.status < 400 { "OK" } else { "Error" },
        response.body.len()
    );
    for (name, value) in &response.headers {
        raw.push_str(&format!("{}: {}\r\n", name, value));
    }
    raw.push_str("\r\n");
    raw.push_str(&response.body);

    socket.write_all(raw.as_bytes()).await?;
    socket.shutdown().await?;
    Ok(())
}
