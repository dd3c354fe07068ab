//! Submission controller for the mood journal.
//!
//! # Responsibility
//! - Seed the in-memory entry list from one startup load.
//! - Validate a selection, build the entry, prepend it, persist the full list.
//!
//! # Invariants
//! - New entries are always prepended; the list is never re-sorted.
//! - Each accepted submission performs exactly one full-list save.
//! - A rejected or failed submission leaves list and selection untouched.
//! - Note text is never written to logs.

use crate::model::entry::Entry;
use crate::model::mood;
use crate::model::user::UserCatalog;
use crate::repo::entry_repo::{EntryStore, LoadDiagnostic};
use crate::repo::slot_repo::{RepoError, SlotStore};
use crate::service::clock::Clock;
use crate::service::selection::SelectionState;
use crate::view::history::HistoryView;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persisting the updated list failed.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "failed to save mood entry: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Why a submission was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingMood,
    MissingUser,
    /// Mood symbol is not in the mood catalog.
    UnknownMood,
    /// User name is not in the configured user catalog.
    UnknownUser,
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMood => write!(f, "no mood selected"),
            Self::MissingUser => write!(f, "no user selected"),
            Self::UnknownMood => write!(f, "mood is not in the catalog"),
            Self::UnknownUser => write!(f, "user is not in the catalog"),
        }
    }
}

/// Result of one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(Entry),
    Rejected(RejectReason),
}

/// Mood journal session over a persisted entry list.
pub struct JournalService<S: SlotStore, C: Clock> {
    store: EntryStore<S>,
    users: Option<UserCatalog>,
    clock: C,
    entries: Vec<Entry>,
    startup_diagnostic: Option<LoadDiagnostic>,
}

impl<S: SlotStore, C: Clock> JournalService<S, C> {
    /// Loads the stored list once and starts a session.
    ///
    /// `users = None` disables multi-user selection; entries then carry no user.
    pub fn open(store: EntryStore<S>, users: Option<UserCatalog>, clock: C) -> Self {
        let outcome = store.load();
        let startup_diagnostic = outcome.diagnostic().cloned();
        let entries = outcome.into_entries();
        info!(
            "event=journal_open module=service status={} key={} count={} multi_user={}",
            if startup_diagnostic.is_some() {
                "recovered"
            } else {
                "ok"
            },
            store.key(),
            entries.len(),
            users.is_some()
        );

        Self {
            store,
            users,
            clock,
            entries,
            startup_diagnostic,
        }
    }

    /// Fresh picker state for this journal's user configuration.
    pub fn new_selection(&self) -> SelectionState {
        SelectionState::new(self.users.as_ref())
    }

    /// Commits the selection as a new entry at the head of the list.
    ///
    /// # Contract
    /// - Missing mood (or user, when multi-user is enabled) returns
    ///   `Rejected` without touching any state.
    /// - Mood and user must belong to their catalogs, whatever route filled
    ///   the selection; otherwise the submission is `Rejected` as well.
    /// - On success mood and note are cleared; the user stays selected.
    ///
    /// # Errors
    /// - Returns `ServiceError::Repo` when the save fails; nothing is committed.
    pub fn submit(
        &mut self,
        selection: &mut SelectionState,
    ) -> Result<SubmitOutcome, ServiceError> {
        let mood = match selection.mood() {
            None => return Ok(reject(RejectReason::MissingMood)),
            Some(symbol) if mood::find_by_symbol(symbol).is_none() => {
                return Ok(reject(RejectReason::UnknownMood))
            }
            Some(symbol) => symbol,
        };

        let user = match &self.users {
            Some(catalog) => match selection.user() {
                None => return Ok(reject(RejectReason::MissingUser)),
                Some(name) if !catalog.contains(name) => {
                    return Ok(reject(RejectReason::UnknownUser))
                }
                Some(name) => Some(name.to_string()),
            },
            None => None,
        };

        let entry = Entry::new(self.clock.now(), mood, &selection.note_text, user);

        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.push(entry.clone());
        updated.extend(self.entries.iter().cloned());

        if let Err(err) = self.store.save(&updated) {
            error!(
                "event=entry_submit module=service status=error id={} error={}",
                entry.id, err
            );
            return Err(err.into());
        }

        self.entries = updated;
        selection.reset_after_submit();
        info!(
            "event=entry_submit module=service status=ok id={} count={} has_note={}",
            entry.id,
            self.entries.len(),
            entry.has_note()
        );

        Ok(SubmitOutcome::Submitted(entry))
    }

    /// Current list, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Projection of the current list for display.
    pub fn history(&self) -> HistoryView<'_> {
        HistoryView::new(&self.entries)
    }

    pub fn users(&self) -> Option<&UserCatalog> {
        self.users.as_ref()
    }

    pub fn requires_user(&self) -> bool {
        self.users.is_some()
    }

    /// Why the startup load discarded stored data, if it did.
    pub fn startup_diagnostic(&self) -> Option<&LoadDiagnostic> {
        self.startup_diagnostic.as_ref()
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }
}

fn reject(reason: RejectReason) -> SubmitOutcome {
    debug!("event=entry_submit module=service status=rejected reason={reason:?}");
    SubmitOutcome::Rejected(reason)
}
