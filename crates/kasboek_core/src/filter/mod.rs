//! Record filtering entry points.
//!
//! # Responsibility
//! - Combine category toggles and free-text search into one visible subset.
//! - Keep filtering pure so callers can recompute on every interaction.

pub mod engine;
