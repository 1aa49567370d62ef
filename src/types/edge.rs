//! The edge record used for listing and loading graphs.

use serde::Serialize;

/// A single stored adjacency entry, `source -> target`.
///
/// Undirected graphs store both directions, so an undirected edge
/// `(a, b)` shows up as two records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Source vertex ID.
    pub source: String,
    /// Target vertex ID.
    pub target: String,
}

impl Edge {
    /// Create a new edge record.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Parse an edge token of the form `(a,b)`.
    ///
    /// Surrounding whitespace inside the parentheses is trimmed. Returns
    /// `None` when the token is not exactly one parenthesised pair.
    pub fn parse_token(token: &str) -> Option<Self> {
        let inner = token.strip_prefix('(')?.strip_suffix(')')?;
        let (source, target) = inner.split_once(',')?;
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() || target.contains(',') {
            return None;
        }
        Some(Self::new(source, target))
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} , {})", self.source, self.target)
    }
}
