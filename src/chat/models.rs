//! The core models for a chat session with the answer service.
use serde::{Deserialize, Serialize};

use crate::backend::Source;

/// One message in the transcript, authored by either the user or the
/// assistant. Turns are never edited after creation, only appended.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Turn {
    User {
        content: String,
    },
    Assistant {
        content: String,
        #[serde(default)]
        sources: Vec<Source>,
    },
}

impl Turn {
    pub fn user(content: &str) -> Self {
        Turn::User {
            content: content.to_string(),
        }
    }

    pub fn assistant(content: &str, sources: Vec<Source>) -> Self {
        Turn::Assistant {
            content: content.to_string(),
            sources,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Turn::User { content } => content,
            Turn::Assistant { content, .. } => content,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Turn::User { .. })
    }
}

/// The ordered, session-scoped list of all turns. Append-only during
/// a session; `clear` is the only destructive operation and removes
/// every turn at once. Never persisted beyond the session.
#[derive(Default)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, turn: Turn) {
        self.0.push(turn)
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.0.iter()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }
}
