//! Core use-case services.
//!
//! # Responsibility
//! - Hold the transient selection made through the pickers.
//! - Turn a valid selection into a persisted entry.
//!
//! # See also
//! - `repo::entry_repo` for the persistence contract.

pub mod clock;
pub mod journal_service;
pub mod selection;
