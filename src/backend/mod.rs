pub mod client;
pub mod models;

pub use client::BackendClient;
pub use models::{
    ConnectivityStatus, FALLBACK_ERROR_ANSWER, FALLBACK_OFFLINE_ANSWER, QueryError, QueryOutcome,
    QueryRequest, QueryResponse, Source,
};
