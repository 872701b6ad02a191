use crate::backend::{BackendClient, ConnectivityStatus, QueryError};

use super::models::{Transcript, Turn};

/// A chat session: the transcript plus the backend client that
/// answers each submission. Created at session start and dropped at
/// disconnect; the transcript never outlives it and is never shared
/// across sessions.
pub struct Session {
    transcript: Transcript,
    client: BackendClient,
}

/// The result of one submission: the assistant turn that was appended
/// and any backend error to surface alongside it.
pub struct Exchange {
    pub turn: Turn,
    pub error: Option<QueryError>,
}

impl Session {
    pub fn new(client: BackendClient) -> Self {
        Self {
            transcript: Transcript::new(),
            client,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Probes backend reachability. Observational only: the
    /// transcript is untouched and a failed probe doesn't prevent
    /// submissions.
    pub async fn health(&self) -> ConnectivityStatus {
        self.client.health().await
    }

    /// Runs one submission: appends the user turn, dispatches exactly
    /// one query, then appends the assistant turn built from the
    /// outcome. Always appends exactly one turn per role, even when
    /// the backend fails; the session stays usable.
    pub async fn submit(&mut self, question: &str) -> Exchange {
        self.transcript.push(Turn::user(question));

        let outcome = self.client.query(question).await;

        let turn = Turn::assistant(&outcome.response.answer, outcome.response.sources);
        self.transcript.push(turn.clone());

        Exchange {
            turn,
            error: outcome.error,
        }
    }

    /// Empties the transcript unconditionally.
    pub fn clear(&mut self) {
        self.transcript.clear()
    }
}
