use crate::constants::history::{DEFAULT_MAX_TOKEN_LIMIT, EMPTY_SUMMARY, SUMMARY_PREVIEW_QUERIES};
use crate::reply::StructuredReply;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One query and the reply recorded for it.
#[derive(Debug, Clone)]
pub struct Turn {
    pub query: String,
    pub response: StructuredReply,
    pub asked_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(query: impl Into<String>, response: StructuredReply) -> Self {
        Self {
            query: query.into(),
            response,
            asked_at: Utc::now(),
        }
    }
}

/// Append-only log of turns for one user session.
///
/// Owned by the caller and passed into the generator, so several sessions can
/// live side by side. Growth is unbounded: `max_token_limit` is carried as
/// configuration and reported, but never used to drop turns.
pub struct SessionHistory {
    id: Uuid,
    turns: Vec<Turn>,
    max_token_limit: usize,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
            max_token_limit: DEFAULT_MAX_TOKEN_LIMIT,
        }
    }

    pub fn with_token_limit(mut self, limit: usize) -> Self {
        self.max_token_limit = limit;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn token_limit(&self) -> usize {
        self.max_token_limit
    }

    pub fn record(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Turns in insertion order.
    pub fn all_turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.turns.iter().map(|t| t.query.as_str())
    }

    /// The last `n` turns, oldest first.
    pub fn recent(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn clear(&mut self) {
        tracing::info!(session = %self.id, turns = self.turns.len(), "clearing session history");
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn summarize(&self) -> String {
        if self.turns.is_empty() {
            return EMPTY_SUMMARY.to_string();
        }

        let preview = self
            .queries()
            .take(SUMMARY_PREVIEW_QUERIES)
            .collect::<Vec<_>>()
            .join(", ");
        let more = if self.turns.len() > SUMMARY_PREVIEW_QUERIES {
            "..."
        } else {
            ""
        };

        format!("Session has {} queries: {}{}", self.turns.len(), preview, more)
    }

    pub fn estimate_tokens(&self) -> usize {
        self.turns
            .iter()
            .map(|t| (t.query.len() + t.response.char_len()) / 4)
            .sum()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}
