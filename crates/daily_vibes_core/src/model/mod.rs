//! Domain model for mood journal records and their fixed catalogs.
//!
//! # Responsibility
//! - Define the persisted `Entry` record shape.
//! - Define the closed mood and user catalogs offered by pickers.
//!
//! # Invariants
//! - Entries are immutable once constructed.
//! - Catalogs are fixed for the lifetime of a process.

pub mod entry;
pub mod mood;
pub mod user;
