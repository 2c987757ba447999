use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// A fully built log POST, ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct LogRequest {
    pub url: String,
    /// Header name/value pairs in send order.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl LogRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back from the ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single log request and reads the whole response.
#[async_trait]
pub trait LogTransport: Send + Sync {
    /// Transport name (e.g., "https", "recording").
    fn name(&self) -> &str;

    async fn send(&self, request: LogRequest) -> Result<TransportResponse>;
}

/// HTTPS transport backed by a shared `reqwest` client with default settings.
pub struct HttpsTransport {
    client: Client,
}

impl HttpsTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpsTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogTransport for HttpsTransport {
    fn name(&self) -> &str {
        "https"
    }

    async fn send(&self, request: LogRequest) -> Result<TransportResponse> {
        debug!(url = %request.url, bytes = request.body.len(), "POSTing log");

        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .context("Log ingestion HTTP request failed")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read log ingestion response body")?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accept one connection, return the raw request text, and answer with `reply`.
    async fn serve_once(listener: TcpListener, reply: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut chunk = [0u8; 1024];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            raw.extend_from_slice(&chunk[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&raw[..header_end]).to_lowercase();
        let content_length: usize = head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .map(|v| v.trim().parse().unwrap())
            .unwrap_or(0);
        while raw.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending body");
            raw.extend_from_slice(&chunk[..n]);
        }

        socket.write_all(reply.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8(raw).unwrap()
    }

    // Keeps a proxy configured in the test environment out of the way.
    fn direct_transport() -> HttpsTransport {
        HttpsTransport::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn https_transport_posts_headers_and_body() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(serve_once(
            listener,
            "HTTP/1.1 401 Unauthorized\r\nContent-Length: 12\r\nConnection: close\r\n\r\nUnauthorized",
        ));

        let body = r#"{"message":"Successful API Call","level":"info"}"#;
        let response = direct_transport()
            .send(LogRequest {
                url: format!("http://127.0.0.1:{port}/"),
                headers: vec![
                    ("Authorization".into(), "Bearer tok-123".into()),
                    ("Content-Type".into(), "application/json".into()),
                ],
                body: body.into(),
            })
            .await
            .unwrap();

        assert_eq!(
            response,
            TransportResponse { status: 401, body: "Unauthorized".into() }
        );

        let raw = server.await.unwrap();
        let (head, sent_body) = raw.split_once("\r\n\r\n").unwrap();
        let mut lines = head.lines();
        assert_eq!(lines.next(), Some("POST / HTTP/1.1"));
        let headers: Vec<String> = lines.map(str::to_lowercase).collect();
        assert!(headers.iter().any(|h| h == "authorization: bearer tok-123"));
        assert!(headers.iter().any(|h| h == "content-type: application/json"));
        assert_eq!(sent_body, body);
    }

    #[tokio::test]
    async fn https_transport_reports_connection_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = direct_transport()
            .send(LogRequest {
                url: format!("http://127.0.0.1:{port}/"),
                headers: Vec::new(),
                body: "{}".into(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Log ingestion HTTP request failed"));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = LogRequest {
            url: "https://in.logs.betterstack.com/".into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: "{}".into(),
        };
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("Authorization"), None);
    }

    #[test]
    fn success_range() {
        let ok = TransportResponse { status: 202, body: String::new() };
        let bad = TransportResponse { status: 401, body: "Unauthorized".into() };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
