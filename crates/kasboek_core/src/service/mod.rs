//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into record-store operations.
//! - Derive overview figures from stored records.
//! - Keep CLI/presentation layers decoupled from storage details.

pub mod overview;
pub mod record_store;
