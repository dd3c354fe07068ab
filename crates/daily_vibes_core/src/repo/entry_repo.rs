//! Entry list persistence over a single durable slot.
//!
//! # Responsibility
//! - Load the full entry list once at startup.
//! - Save the full entry list after every accepted submission.
//!
//! # Invariants
//! - `load` is total: absent or corrupt data yields an empty list, never an error.
//! - `save` always writes the complete list, never an incremental append.
//! - Encoding is compact JSON with fields in `id, date, mood, note, user` order,
//!   so load followed by save reproduces well-formed stored text exactly.
//!   The one normalization is `"user": null`, which is saved without the key.

use crate::model::entry::Entry;
use crate::repo::slot_repo::{RepoResult, SlotStore};
use log::{debug, warn};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Slot key used when configuration does not name one.
pub const DEFAULT_SLOT_KEY: &str = "daily-vibes-entries";

/// Why a stored entry list was discarded during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadDiagnostic {
    /// Valid JSON, but not an array (`found` names the JSON kind).
    NotASequence { found: &'static str },
    /// Not JSON at all, or an array holding records of the wrong shape.
    Malformed { reason: String },
    /// The slot itself could not be read.
    ReadFailed { reason: String },
}

impl LoadDiagnostic {
    fn code(&self) -> &'static str {
        match self {
            Self::NotASequence { .. } => "not_a_sequence",
            Self::Malformed { .. } => "malformed",
            Self::ReadFailed { .. } => "read_failed",
        }
    }
}

impl Display for LoadDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotASequence { found } => {
                write!(f, "saved mood history is not a list (found {found})")
            }
            Self::Malformed { reason } => write!(f, "saved mood history is malformed: {reason}"),
            Self::ReadFailed { reason } => write!(f, "saved mood history is unreadable: {reason}"),
        }
    }
}

/// Result of the startup load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Slot was absent or held a well-formed list.
    Loaded(Vec<Entry>),
    /// Stored data was discarded; `entries` is always empty.
    Recovered {
        entries: Vec<Entry>,
        diagnostic: LoadDiagnostic,
    },
}

impl LoadOutcome {
    fn recovered(diagnostic: LoadDiagnostic) -> Self {
        Self::Recovered {
            entries: Vec::new(),
            diagnostic,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        match self {
            Self::Loaded(entries) | Self::Recovered { entries, .. } => entries,
        }
    }

    pub fn into_entries(self) -> Vec<Entry> {
        match self {
            Self::Loaded(entries) | Self::Recovered { entries, .. } => entries,
        }
    }

    pub fn diagnostic(&self) -> Option<&LoadDiagnostic> {
        match self {
            Self::Loaded(_) => None,
            Self::Recovered { diagnostic, .. } => Some(diagnostic),
        }
    }
}

/// Entry list adapter bound to one slot key.
pub struct EntryStore<S: SlotStore> {
    slots: S,
    key: String,
}

impl<S: SlotStore> EntryStore<S> {
    /// Binds the adapter to `DEFAULT_SLOT_KEY`.
    pub fn new(slots: S) -> Self {
        Self::with_key(slots, DEFAULT_SLOT_KEY)
    }

    pub fn with_key(slots: S, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the slot and decodes the entry list.
    ///
    /// Corrupt or unreadable data is reported through
    /// `LoadOutcome::Recovered` plus one `warn` log line.
    pub fn load(&self) -> LoadOutcome {
        let raw = match self.slots.read_slot(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=entries_load module=repo status=empty key={}", self.key);
                return LoadOutcome::Loaded(Vec::new());
            }
            Err(err) => {
                return self.recover(LoadDiagnostic::ReadFailed {
                    reason: err.to_string(),
                })
            }
        };

        match decode_entries(&raw) {
            Ok(entries) => {
                debug!(
                    "event=entries_load module=repo status=ok key={} count={}",
                    self.key,
                    entries.len()
                );
                LoadOutcome::Loaded(entries)
            }
            Err(diagnostic) => self.recover(diagnostic),
        }
    }

    /// Overwrites the slot with the complete list.
    pub fn save(&self, entries: &[Entry]) -> RepoResult<()> {
        let encoded = serde_json::to_string(entries)?;
        self.slots.write_slot(&self.key, &encoded)?;
        debug!(
            "event=entries_save module=repo status=ok key={} count={} bytes={}",
            self.key,
            entries.len(),
            encoded.len()
        );
        Ok(())
    }

    fn recover(&self, diagnostic: LoadDiagnostic) -> LoadOutcome {
        warn!(
            "event=entries_load module=repo status=recovered key={} reason={} detail={}",
            self.key,
            diagnostic.code(),
            diagnostic
        );
        LoadOutcome::recovered(diagnostic)
    }
}

fn decode_entries(raw: &str) -> Result<Vec<Entry>, LoadDiagnostic> {
    let value: Value = serde_json::from_str(raw).map_err(|err| LoadDiagnostic::Malformed {
        reason: err.to_string(),
    })?;

    if !value.is_array() {
        return Err(LoadDiagnostic::NotASequence {
            found: json_kind(&value),
        });
    }

    serde_json::from_value(value).map_err(|err| LoadDiagnostic::Malformed {
        reason: err.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_entries, LoadDiagnostic};

    #[test]
    fn decode_reports_json_kind_for_non_arrays() {
        assert_eq!(
            decode_entries(r#"{"id":1}"#),
            Err(LoadDiagnostic::NotASequence { found: "object" })
        );
        assert_eq!(
            decode_entries(r#""just text""#),
            Err(LoadDiagnostic::NotASequence { found: "string" })
        );
        assert_eq!(
            decode_entries("null"),
            Err(LoadDiagnostic::NotASequence { found: "null" })
        );
    }

    #[test]
    fn decode_rejects_plain_text_and_bad_records() {
        assert!(matches!(
            decode_entries("not json"),
            Err(LoadDiagnostic::Malformed { .. })
        ));
        assert!(matches!(
            decode_entries(r#"[{"id":"x"}]"#),
            Err(LoadDiagnostic::Malformed { .. })
        ));
    }

    #[test]
    fn decode_accepts_entries_without_user() {
        let entries =
            decode_entries(r#"[{"id":5,"date":"2024-01-01T00:00:00.000Z","mood":"😊","note":""}]"#)
                .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user, None);
    }
}
