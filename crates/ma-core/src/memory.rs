//! Append-only event log shared by both agents.
//!
//! Entries are kept in insertion order and never removed, rewritten, or
//! deduplicated. The log has no size bound.

/// Ordered record of event strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry verbatim.
    pub fn append(&mut self, event: impl Into<String>) {
        self.entries.push(event.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently appended entry.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn contains(&self, event: &str) -> bool {
        self.entries.iter().any(|e| e == event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}
