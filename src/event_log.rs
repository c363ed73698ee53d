//! Human-readable event log
//!
//! Every state change the engine applies is described by an English sentence
//! appended here. The log travels with the snapshot so clients can render a
//! move ticker; it is most-recent-first, append-only within a game, and
//! cleared on reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged event with its UTC timestamp
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub time: DateTime<Utc>,
}

/// Most-recent-first list of game events
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        EventLog::default()
    }

    /// Record an event, stamped with the current time
    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.insert(
            0,
            LogEntry {
                message: message.into(),
                time: Utc::now(),
            },
        );
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The most recent entry, if any
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.first()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
