//! Form input handling.
//!
//! # Responsibility
//! - Parse keystroke-level numeric text without blocking in-progress typing.
//! - Assemble draft records and apply derived-field rules before submission.

pub mod draft;
pub mod numeric;
