//! Read-only projections of the entry list.

pub mod history;
