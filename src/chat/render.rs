//! Plain-text rendering of turns, sources, and status banners.
//!
//! Rendering is a pure function of the input: the same transcript
//! always produces the same output.
use crate::backend::{ConnectivityStatus, QueryError};

use super::models::{Transcript, Turn};

pub fn render_turn(turn: &Turn) -> String {
    match turn {
        Turn::User { content } => format!("You: {}", content),
        Turn::Assistant { content, sources } => {
            let mut out = format!("Assistant: {}", content);
            if !sources.is_empty() {
                out.push_str("\n\nView Sources");
                for (i, source) in sources.iter().enumerate() {
                    out.push_str(&format!(
                        "\nSource {} (Score: {:.4})\n{}\n---",
                        i + 1,
                        source.score,
                        source.text
                    ));
                }
            }
            out
        }
    }
}

pub fn render_transcript(transcript: &Transcript) -> String {
    transcript
        .iter()
        .map(render_turn)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The status banner shown for a connectivity probe result. A failed
/// probe includes a hint naming the backend's startup command; it
/// never blocks usage.
pub fn render_status(status: &ConnectivityStatus, port: &str) -> String {
    match status {
        ConnectivityStatus::Connected => {
            format!("✅ Connected to server on port {}", port)
        }
        ConnectivityStatus::ServerError(code) => {
            format!("❌ Server returned status code {}", code)
        }
        ConnectivityStatus::ConnectionFailed(detail) => {
            format!(
                "❌ Could not connect to server: {}\nMake sure the server is running on port {}. You can start it with 'npm start'",
                detail, port
            )
        }
    }
}

pub fn render_query_error(error: &QueryError) -> String {
    match error {
        QueryError::Http { status, body } => format!("Error: {} - {}", status, body),
        QueryError::Transport(detail) => format!("Exception: {}", detail),
    }
}
