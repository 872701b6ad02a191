use std::time::Duration;

use super::models::{ConnectivityStatus, QueryOutcome, QueryRequest, QueryResponse};

// The probe should report quickly rather than hang the session
const HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

// Retrieval plus answer synthesis can be slow, but a hung backend
// must not block the session forever
const QUERY_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the external retrieval/answer service. The service
/// is a black box: only its health and query endpoints matter here.
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Liveness probe against the health endpoint. Purely
    /// observational: it reports reachability and performs no real
    /// work. Only HTTP 200 counts as connected (body ignored); every
    /// other status is degraded.
    pub async fn health(&self) -> ConnectivityStatus {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(resp) if resp.status() == reqwest::StatusCode::OK => ConnectivityStatus::Connected,
            Ok(resp) => ConnectivityStatus::ServerError(resp.status().as_u16()),
            Err(err) => ConnectivityStatus::ConnectionFailed(err.to_string()),
        }
    }

    /// Sends one question to the query endpoint. Exactly one request
    /// per call: no retries, no backoff, no caching of repeated
    /// questions. Never fails at the caller level; backend failures
    /// are folded into the outcome as a fixed fallback answer plus
    /// the error detail for display.
    pub async fn query(&self, question: &str) -> QueryOutcome {
        let url = format!("{}/api/query", self.base_url);
        let payload = QueryRequest {
            query: question.to_string(),
        };

        let result = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .timeout(QUERY_TIMEOUT)
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(resp) if resp.status() == reqwest::StatusCode::OK => {
                match resp.json::<QueryResponse>().await {
                    Ok(response) => QueryOutcome::success(response),
                    Err(err) => {
                        tracing::error!("Malformed query response: {}", err);
                        QueryOutcome::transport_error(err.to_string())
                    }
                }
            }
            Ok(resp) => {
                let status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_default();
                tracing::error!("Query failed with status {}: {}", status, body);
                QueryOutcome::http_error(status, body)
            }
            Err(err) => {
                tracing::error!("Query request failed: {}", err);
                QueryOutcome::transport_error(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::models::{FALLBACK_ERROR_ANSWER, FALLBACK_OFFLINE_ANSWER, QueryError};

    // A base URL that refuses connections: bind an ephemeral port and
    // drop the listener before using it
    fn unreachable_base_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[test]
    fn test_trailing_slash_stripped_from_base_url() {
        let client = BackendClient::new("http://localhost:5050/");
        assert_eq!(client.base_url(), "http://localhost:5050");
    }

    #[tokio::test]
    async fn test_health_connected() {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("GET", "/health").with_status(200).create();

        let client = BackendClient::new(&server.url());
        let status = client.health().await;

        mock.assert();
        assert_eq!(status, ConnectivityStatus::Connected);
    }

    #[tokio::test]
    async fn test_health_server_error() {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("GET", "/health").with_status(503).create();

        let client = BackendClient::new(&server.url());
        let status = client.health().await;

        mock.assert();
        assert_eq!(status, ConnectivityStatus::ServerError(503));
    }

    #[tokio::test]
    async fn test_health_non_200_success_is_degraded() {
        let mut server = mockito::Server::new_async().await;

        // 204 is a 2xx but not the 200 the contract requires
        let mock = server.mock("GET", "/health").with_status(204).create();

        let client = BackendClient::new(&server.url());
        let status = client.health().await;

        mock.assert();
        assert_eq!(status, ConnectivityStatus::ServerError(204));
    }

    #[tokio::test]
    async fn test_health_unresponsive_server_times_out() {
        // Accepts connections but never answers, so the probe must
        // give up via its own timeout
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let client = BackendClient::new(&format!("http://{}", addr));
        let start = std::time::Instant::now();
        let status = client.health().await;

        assert!(matches!(status, ConnectivityStatus::ConnectionFailed(_)));
        assert!(start.elapsed() < Duration::from_secs(5));
        drop(listener);
    }

    #[tokio::test]
    async fn test_health_connection_failed() {
        let client = BackendClient::new(&unreachable_base_url());

        match client.health().await {
            ConnectivityStatus::ConnectionFailed(detail) => assert!(!detail.is_empty()),
            other => panic!("Expected ConnectionFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_query_success_with_sources() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/query")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "query": "What is TCM?"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"answer":"X","sources":[{"text":"A","score":0.9123}]}"#)
            .create();

        let client = BackendClient::new(&server.url());
        let outcome = client.query("What is TCM?").await;

        mock.assert();
        assert!(outcome.error.is_none());
        assert_eq!(outcome.response.answer, "X");
        assert_eq!(outcome.response.sources.len(), 1);
        assert_eq!(outcome.response.sources[0].text, "A");
    }

    #[tokio::test]
    async fn test_query_success_without_sources() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/query")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"answer":"Just an answer"}"#)
            .create();

        let client = BackendClient::new(&server.url());
        let outcome = client.query("Anything?").await;

        mock.assert();
        assert!(outcome.error.is_none());
        assert_eq!(outcome.response.answer, "Just an answer");
        assert!(outcome.response.sources.is_empty());
    }

    #[tokio::test]
    async fn test_query_http_error_returns_fallback() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/query")
            .with_status(500)
            .with_body("internal server error")
            .create();

        let client = BackendClient::new(&server.url());
        let outcome = client.query("Anything?").await;

        mock.assert();
        assert_eq!(outcome.response.answer, FALLBACK_ERROR_ANSWER);
        assert!(outcome.response.sources.is_empty());
        assert_eq!(
            outcome.error,
            Some(QueryError::Http {
                status: 500,
                body: "internal server error".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_query_unreachable_returns_offline_fallback() {
        let client = BackendClient::new(&unreachable_base_url());
        let outcome = client.query("Anything?").await;

        assert_eq!(outcome.response.answer, FALLBACK_OFFLINE_ANSWER);
        assert!(outcome.response.sources.is_empty());
        match outcome.error {
            Some(QueryError::Transport(detail)) => assert!(!detail.is_empty()),
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_query_malformed_body_returns_offline_fallback() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/query")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create();

        let client = BackendClient::new(&server.url());
        let outcome = client.query("Anything?").await;

        mock.assert();
        assert_eq!(outcome.response.answer, FALLBACK_OFFLINE_ANSWER);
        assert!(matches!(outcome.error, Some(QueryError::Transport(_))));
    }
}
