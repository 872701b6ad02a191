//! Typed request and response models for the answer service API.
use serde::{Deserialize, Serialize};

/// Fallback answer used when the backend returns a non-200 status.
pub const FALLBACK_ERROR_ANSWER: &str = "Sorry, I encountered an error processing your request.";

/// Fallback answer used when the backend can't be reached at all.
pub const FALLBACK_OFFLINE_ANSWER: &str = "Sorry, I couldn't connect to the backend service.";

/// A retrieved excerpt with the backend's relevance score. The score
/// is an opaque ranking signal; ordering within a response reflects
/// the backend's ranking and must be preserved as-is.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Source {
    pub text: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct QueryResponse {
    pub answer: String,
    // Absent on the wire means no sources
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Reachability of the backend as reported by the health endpoint.
/// Recomputed on every probe and never stored in the transcript.
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectivityStatus {
    Connected,
    ServerError(u16),
    ConnectionFailed(String),
}

/// What went wrong with a query call, kept for display alongside the
/// fallback answer.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryError {
    Http { status: u16, body: String },
    Transport(String),
}

/// The result of a single query dispatch. Always carries a usable
/// response: on failure the response holds a fixed apology and no
/// sources, with the underlying error preserved for display.
#[derive(Clone, Debug)]
pub struct QueryOutcome {
    pub response: QueryResponse,
    pub error: Option<QueryError>,
}

impl QueryOutcome {
    pub fn success(response: QueryResponse) -> Self {
        Self {
            response,
            error: None,
        }
    }

    pub fn http_error(status: u16, body: String) -> Self {
        Self {
            response: QueryResponse {
                answer: FALLBACK_ERROR_ANSWER.to_string(),
                sources: Vec::new(),
            },
            error: Some(QueryError::Http { status, body }),
        }
    }

    pub fn transport_error(detail: String) -> Self {
        Self {
            response: QueryResponse {
                answer: FALLBACK_OFFLINE_ANSWER.to_string(),
                sources: Vec::new(),
            },
            error: Some(QueryError::Transport(detail)),
        }
    }
}
