//! Domain model for tracked finance records.
//!
//! # Responsibility
//! - Define the record shapes persisted per entity store.
//! - Keep per-entity configuration (store names, vocabularies, columns,
//!   form fields) in one static schema table.
//!
//! # Invariants
//! - Every persisted record carries a stable `RecordId`.
//! - Records are replaced wholesale, never patched field by field in storage.

pub mod entry;
pub mod investment;
pub mod record;
pub mod schema;
