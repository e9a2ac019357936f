//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract record stores persist through.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs surface decode failures as `InvalidData` instead of
//!   silently dropping persisted records.

pub mod kv_repo;
