//! Copy history, newest first.

use serde::{Deserialize, Serialize};

/// One copied prompt with its capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub time: String,
}

/// Bounded history of copied prompts.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Maximum retained entries; the oldest is evicted beyond this.
    pub const LIMIT: usize = 10;

    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a copied prompt. Returns false when the text duplicates the
    /// newest entry (older duplicates are allowed back in).
    pub fn push(&mut self, text: &str, time: String) -> bool {
        if text.is_empty() {
            return false;
        }
        if self.entries.first().is_some_and(|head| head.text == text) {
            return false;
        }
        self.entries.insert(0, HistoryEntry { text: text.to_string(), time });
        self.entries.truncate(Self::LIMIT);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
