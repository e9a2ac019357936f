//! Core domain logic for Kasboek.
//! This crate is the single source of truth for record, filter and table invariants.

pub mod config;
pub mod context;
pub mod db;
pub mod filter;
pub mod input;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod table;

pub use config::{AppConfig, ConfigError};
pub use context::{AppContext, ContextError, SqliteRecordStore};
pub use filter::engine::{category_predicate, FilterEngine, FilterError, FilterOption};
pub use input::draft::DraftForm;
pub use input::numeric::{parse_numeric_text, NumericField, ParseOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{Entry, Saving};
pub use model::investment::Investment;
pub use model::record::{round2, FieldKey, FieldValue, Record, RecordId, RecordShape};
pub use model::schema::{EntityKind, EntitySchema, FormField, FormFieldKind};
pub use repo::kv_repo::{KeyValueRepository, RepoError, RepoResult, SqliteKeyValueRepository};
pub use service::overview::{overview_cards, savings_progress_cards, OverviewCard};
pub use service::record_store::RecordStore;
pub use table::columns::{Cell, Column, ColumnFormatter, RowActions};
pub use table::format::{format_currency, format_date};
pub use table::view::TableView;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
