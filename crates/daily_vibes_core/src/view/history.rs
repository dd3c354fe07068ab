//! History list projection.
//!
//! # Responsibility
//! - Turn stored entries into display rows, newest first.
//!
//! # Invariants
//! - Holds no state beyond a borrowed slice; rows always mirror the list.
//! - Row order is list order; nothing is re-sorted by timestamp.

use crate::model::entry::Entry;
use crate::model::mood;
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// Display pattern equivalent to `MMM d, yyyy h:mm a`.
pub const TIMESTAMP_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// Time zone used when rendering timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// The machine's local zone, DST-aware per entry.
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    fn format(self, timestamp: DateTime<Utc>) -> String {
        match self {
            Self::Local => timestamp
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
            Self::Fixed(offset) => timestamp
                .with_timezone(&offset)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
        }
    }
}

/// One rendered history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: i64,
    /// Formatted timestamp, or the raw stored text when it does not parse.
    pub timestamp: String,
    pub mood: String,
    /// Catalog label, when the stored symbol is a catalog mood.
    pub mood_label: Option<&'static str>,
    pub user: Option<String>,
    /// `None` for empty notes.
    pub note: Option<String>,
}

impl HistoryRow {
    /// Renders the row as a short text block.
    pub fn render(&self) -> String {
        let mut out = format!("{}  {}", self.timestamp, self.mood);
        if let Some(label) = self.mood_label {
            out.push_str(&format!(" ({label})"));
        }
        if let Some(user) = &self.user {
            out.push_str(&format!("\nUser: {user}"));
        }
        if let Some(note) = &self.note {
            out.push('\n');
            out.push_str(note);
        }
        out
    }
}

/// Lazy view over an entry list.
#[derive(Debug, Clone, Copy)]
pub struct HistoryView<'a> {
    entries: &'a [Entry],
    zone: DisplayZone,
    limit: Option<usize>,
}

impl<'a> HistoryView<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Self {
            entries,
            zone: DisplayZone::Local,
            limit: None,
        }
    }

    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    /// Keeps only the first `limit` (newest) rows.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rows in list order. The iterator is `Clone`, so it can be restarted.
    pub fn rows(&self) -> impl Iterator<Item = HistoryRow> + Clone + 'a {
        let zone = self.zone;
        self.visible().iter().map(move |entry| project(entry, zone))
    }

    pub fn len(&self) -> usize {
        self.visible().len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible().is_empty()
    }

    fn visible(&self) -> &'a [Entry] {
        let entries = self.entries;
        match self.limit {
            Some(limit) => &entries[..limit.min(entries.len())],
            None => entries,
        }
    }
}

fn project(entry: &Entry, zone: DisplayZone) -> HistoryRow {
    let timestamp = entry
        .timestamp()
        .map(|value| zone.format(value))
        .unwrap_or_else(|| entry.date.clone());

    HistoryRow {
        id: entry.id,
        timestamp,
        mood: entry.mood.clone(),
        mood_label: mood::find_by_symbol(&entry.mood).map(|option| option.label),
        user: entry.user.clone(),
        note: entry.has_note().then(|| entry.note.clone()),
    }
}
