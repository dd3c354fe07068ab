//! Persistence adapter: durable key-value slots and the entry list stored in one.
//!
//! # Responsibility
//! - Define the slot contract used by core services.
//! - Keep SQL details and JSON encoding inside the persistence boundary.
//!
//! # Invariants
//! - A slot write always replaces the whole stored value.
//! - Loading the entry list never fails; corrupt data degrades to empty.

pub mod entry_repo;
pub mod slot_repo;
