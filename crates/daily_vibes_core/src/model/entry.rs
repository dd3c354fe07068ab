//! Mood entry record.
//!
//! # Responsibility
//! - Define the canonical record stored in the entries slot.
//! - Build new entries from one clock reading.
//!
//! # Invariants
//! - `id` and `date` of a new entry come from the same instant.
//! - `date` keeps its stored text so load/save round trips are lossless.
//! - A stored `"user": null` loads as `None` and is written back without the
//!   `user` key; that is the only shape a round trip normalizes.
//! - Field declaration order matches the external record layout
//!   (`id, date, mood, note, user`).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Millisecond Unix timestamp identifying an entry.
///
/// Uniqueness is best-effort: two submissions in the same millisecond collide.
pub type EntryId = i64;

/// One mood journal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Creation time in epoch milliseconds.
    pub id: EntryId,
    /// RFC 3339 UTC timestamp text, e.g. `2024-03-05T14:07:09.123Z`.
    pub date: String,
    /// Mood symbol. Not checked against the catalog on load.
    pub mood: String,
    /// Trimmed note text, possibly empty.
    pub note: String,
    /// Author name. Omitted when multi-user selection is disabled; an explicit
    /// `null` reads as `None` and is saved back as an omitted key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Entry {
    /// Creates an entry stamped at `now`.
    ///
    /// # Contract
    /// - `id = now` in epoch milliseconds.
    /// - `date` is `now` rendered with millisecond precision and a `Z` suffix.
    /// - `note` is trimmed of surrounding whitespace.
    pub fn new(
        now: DateTime<Utc>,
        mood: impl Into<String>,
        note: &str,
        user: Option<String>,
    ) -> Self {
        Self {
            id: now.timestamp_millis(),
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            mood: mood.into(),
            note: note.trim().to_string(),
            user,
        }
    }

    /// Parses the stored `date` text.
    ///
    /// Returns `None` when the stored value is not valid RFC 3339.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|value| value.with_timezone(&Utc))
    }

    /// Returns whether a non-empty note is attached.
    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }
}
