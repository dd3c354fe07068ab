//! Core domain logic for Daily Vibes, a local mood journal.
//! This crate is the single source of truth for journal invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use config::{ConfigError, VibesConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{Entry, EntryId};
pub use model::mood::{MoodOption, MOOD_CATALOG};
pub use model::user::{CatalogError, UserCatalog};
pub use repo::entry_repo::{EntryStore, LoadDiagnostic, LoadOutcome, DEFAULT_SLOT_KEY};
pub use repo::slot_repo::{RepoError, RepoResult, SlotStore, SqliteSlotStore};
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::journal_service::{JournalService, RejectReason, ServiceError, SubmitOutcome};
pub use service::selection::{SelectionError, SelectionState};
pub use view::history::{DisplayZone, HistoryRow, HistoryView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
