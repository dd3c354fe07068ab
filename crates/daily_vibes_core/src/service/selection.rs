//! Transient picker state for one interactive session.
//!
//! # Responsibility
//! - Track the chosen user, mood, and note text between submissions.
//! - Restrict picks to the fixed catalogs.
//!
//! # Invariants
//! - `selected_mood`, when set, is a catalog symbol.
//! - `selected_user`, when set through `select_user`, is a catalog member.
//! - A submission resets mood and note but keeps the user.

use crate::model::mood;
use crate::model::user::UserCatalog;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected picker input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownMood(String),
    UnknownUser(String),
    /// A user was picked while multi-user selection is disabled.
    UsersDisabled,
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMood(value) => write!(f, "unknown mood: `{value}`"),
            Self::UnknownUser(value) => write!(f, "unknown user: `{value}`"),
            Self::UsersDisabled => write!(f, "user selection is disabled"),
        }
    }
}

impl Error for SelectionError {}

/// Picker state passed into `JournalService::submit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_user: Option<String>,
    pub selected_mood: Option<String>,
    pub note_text: String,
}

impl SelectionState {
    /// Starts a session; the user defaults to the first catalog name.
    pub fn new(users: Option<&UserCatalog>) -> Self {
        Self {
            selected_user: users.map(|catalog| catalog.first().to_string()),
            selected_mood: None,
            note_text: String::new(),
        }
    }

    /// Picks a mood given as a catalog symbol or label.
    pub fn select_mood(&mut self, input: &str) -> Result<(), SelectionError> {
        let picked =
            mood::resolve(input).ok_or_else(|| SelectionError::UnknownMood(input.to_string()))?;
        self.selected_mood = Some(picked.symbol.to_string());
        Ok(())
    }

    pub fn clear_mood(&mut self) {
        self.selected_mood = None;
    }

    /// Picks a user from `users`; `None` means multi-user is disabled.
    pub fn select_user(
        &mut self,
        users: Option<&UserCatalog>,
        name: &str,
    ) -> Result<(), SelectionError> {
        let catalog = users.ok_or(SelectionError::UsersDisabled)?;
        let name = name.trim();
        if !catalog.contains(name) {
            return Err(SelectionError::UnknownUser(name.to_string()));
        }
        self.selected_user = Some(name.to_string());
        Ok(())
    }

    /// Replaces the note text verbatim; trimming happens at submission.
    pub fn set_note(&mut self, text: impl Into<String>) {
        self.note_text = text.into();
    }

    pub fn mood(&self) -> Option<&str> {
        self.selected_mood.as_deref().filter(|value| !value.is_empty())
    }

    pub fn user(&self) -> Option<&str> {
        self.selected_user
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self, requires_user: bool) -> bool {
        self.mood().is_some() && (!requires_user || self.user().is_some())
    }

    pub(crate) fn reset_after_submit(&mut self) {
        self.selected_mood = None;
        self.note_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectionError, SelectionState};
    use crate::model::user::UserCatalog;

    #[test]
    fn new_defaults_user_to_first_catalog_entry() {
        let catalog = UserCatalog::default();
        let state = SelectionState::new(Some(&catalog));
        assert_eq!(state.user(), Some("Shin"));
        assert_eq!(state.mood(), None);
        assert!(state.note_text.is_empty());

        assert_eq!(SelectionState::new(None).user(), None);
    }

    #[test]
    fn select_mood_accepts_labels_and_rejects_unknown() {
        let mut state = SelectionState::default();
        state.select_mood("Angry").unwrap();
        assert_eq!(state.mood(), Some("😡"));

        let err = state.select_mood("meh").unwrap_err();
        assert_eq!(err, SelectionError::UnknownMood("meh".to_string()));
        assert_eq!(state.mood(), Some("😡"));
    }

    #[test]
    fn select_user_requires_catalog_membership() {
        let catalog = UserCatalog::default();
        let mut state = SelectionState::new(Some(&catalog));
        state.select_user(Some(&catalog), "Cho").unwrap();
        assert_eq!(state.user(), Some("Cho"));

        assert_eq!(
            state.select_user(Some(&catalog), "Mallory"),
            Err(SelectionError::UnknownUser("Mallory".to_string()))
        );
        assert_eq!(
            state.select_user(None, "Cho"),
            Err(SelectionError::UsersDisabled)
        );
    }

    #[test]
    fn can_submit_tracks_mood_and_required_user() {
        let mut state = SelectionState::default();
        assert!(!state.can_submit(false));
        state.select_mood("😊").unwrap();
        assert!(state.can_submit(false));
        assert!(!state.can_submit(true));
        state.clear_mood();
        assert!(!state.can_submit(false));
        state.select_mood("😊").unwrap();
        state.selected_user = Some(String::new());
        assert!(!state.can_submit(true));
    }

    #[test]
    fn state_serializes_for_session_handoff() {
        let mut state = SelectionState::new(Some(&UserCatalog::default()));
        state.select_mood("Calm").unwrap();
        state.set_note("draft");

        let json = serde_json::to_string(&state).unwrap();
        let restored: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
