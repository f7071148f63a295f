//! Native HTTP client for the zoning lookup server (feature `api`).

use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{LookupError, Result};
use crate::lookup::{interpret_response, LookupRequest, LookupResult};
use crate::query::SearchQuery;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Sends lookups to the server described by a [`ClientConfig`].
///
/// One request per call; no retries.
#[derive(Debug, Clone)]
pub struct ZoningClient {
    http: Client,
    config: ClientConfig,
}

impl ZoningClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        Ok(Self::with_http(config, http))
    }

    /// Use a preconfigured reqwest client (proxies, TLS, ...).
    pub fn with_http(config: ClientConfig, http: Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn lookup(&self, query: &SearchQuery) -> Result<LookupResult> {
        let url = self.config.lookup_url();
        info!("POST {} for {}", url, query);

        let response = self
            .http
            .post(&url)
            .json(&LookupRequest::new(query))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        debug!("Lookup response {} ({} bytes)", status, body.len());

        interpret_response(status, &body)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.config.health_url();
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        if !status.is_success() {
            return Err(LookupError::Application(format!(
                "Health check returned {}",
                status
            )));
        }
        serde_json::from_str(&body).map_err(|e| LookupError::MalformedResponse(e.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Timeout(self.config.timeout_ms)
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::CONNECTION_ERROR_MESSAGE;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn client_for(base_url: &str, timeout_ms: u64) -> ZoningClient {
        let config = ClientConfig::default()
            .with_base_url(base_url)
            .with_timeout_ms(timeout_ms);
        let http = Client::builder()
            .no_proxy()
            .timeout(config.timeout())
            .build()
            .unwrap();
        ZoningClient::with_http(config, http)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&data).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).to_string()
    }

    /// Answer a single request with a canned response; yields the raw request text.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"city":"Boston","link":"https://x/doc.pdf","notes":"Updated 2024"}"#,
        )
        .await;
        let client = client_for(&base, 5_000);
        let query = SearchQuery::parse(" Boston ").unwrap();

        let result = client.lookup(&query).await.unwrap();
        assert_eq!(result.city, "Boston");
        assert_eq!(result.display_file_type(), "PDF");
        assert_eq!(result.display_notes(), Some("Updated 2024"));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/zoning HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"city":"Boston"}"#));
    }

    #[tokio::test]
    async fn test_lookup_application_error() {
        let (base, _server) = serve_once("404 Not Found", r#"{"error":"City not found"}"#).await;
        let client = client_for(&base, 5_000);
        let query = SearchQuery::parse("Atlantis").unwrap();

        let err = client.lookup(&query).await.unwrap_err();
        assert_eq!(err, LookupError::Application("City not found".to_string()));
    }

    #[tokio::test]
    async fn test_lookup_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr), 5_000);
        let query = SearchQuery::parse("Boston").unwrap();
        let err = client.lookup(&query).await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
        assert_eq!(err.user_message(), CONNECTION_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_lookup_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let client = client_for(&format!("http://{}", addr), 200);
        let query = SearchQuery::parse("Boston").unwrap();
        let err = client.lookup(&query).await.unwrap_err();
        assert_eq!(err, LookupError::Timeout(200));
    }

    #[tokio::test]
    async fn test_health() {
        let (base, server) = serve_once("200 OK", r#"{"status":"healthy"}"#).await;
        let client = client_for(&base, 5_000);
        let health = client.health().await.unwrap();
        assert!(health.is_healthy());
        assert!(server.await.unwrap().starts_with("GET /health HTTP/1.1"));
    }
}
