//! Change diary carried by every Referable.
//!
//! The diary is append-only bookkeeping and never part of a node's
//! content hash.

use chrono::{DateTime, Utc};

/// Kind of change recorded in a diary entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Change {
    /// The node was attached to a collection.
    Created,
    /// The node's own attributes or its child list changed.
    Modified,
    /// The node was detached from its collection.
    Removed,
}

/// One diary entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiaryEntry {
    pub at: DateTime<Utc>,
    pub change: Change,
}

/// Append-only change diary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diary {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    entries: Vec<DiaryEntry>,
}

impl Diary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change stamped with the current time.
    pub fn record(&mut self, change: Change) {
        self.record_at(change, Utc::now());
    }

    /// Record a change with an explicit timestamp.
    pub fn record_at(&mut self, change: Change, at: DateTime<Utc>) {
        if change == Change::Created && self.created_at.is_none() {
            self.created_at = Some(at);
        }
        self.updated_at = Some(at);
        self.entries.push(DiaryEntry { at, change });
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn last_change(&self) -> Option<Change> {
        self.entries.last().map(|e| e.change)
    }
}
