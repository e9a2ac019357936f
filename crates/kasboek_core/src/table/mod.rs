//! Tabular presentation of record lists.
//!
//! # Responsibility
//! - Turn declarative column keys into renderable columns.
//! - Apply the fixed `nl-NL` currency and date formatting.
//! - Zip filtered rows and columns into display-ready cells.

pub mod columns;
pub mod format;
pub mod view;
