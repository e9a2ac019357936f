//! Category toggles and free-text search over record lists.
//!
//! # Responsibility
//! - Track which category filter options are selected.
//! - Compute the visible subset of a record list for the current selection
//!   and search term.
//!
//! # Invariants
//! - No selected option means the category stage passes every record.
//! - Output keeps the relative order of the input list.
//! - Applying a filter never mutates the input records.

use crate::model::record::Record;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Membership test deciding whether a record passes the active category values.
pub type Predicate<T> = Box<dyn Fn(&T, &BTreeSet<String>) -> bool>;

/// Errors raised while configuring a filter engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    DuplicateOptionId(String),
}

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateOptionId(id) => write!(f, "filter option id already declared: {id}"),
        }
    }
}

impl Error for FilterError {}

/// One toggleable category option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub id: String,
    /// Display text.
    pub label: String,
    /// Literal category value matched against records.
    pub value: String,
}

impl FilterOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Stateful filter over a record type.
pub struct FilterEngine<T> {
    options: Vec<FilterOption>,
    selected: BTreeMap<String, bool>,
    active_values: BTreeSet<String>,
    search_term: String,
    predicate: Predicate<T>,
}

impl<T> FilterEngine<T> {
    /// Creates an engine with every option unselected and an empty search term.
    ///
    /// # Errors
    /// - Returns `FilterError::DuplicateOptionId` when two options share an id.
    pub fn new(
        options: Vec<FilterOption>,
        predicate: impl Fn(&T, &BTreeSet<String>) -> bool + 'static,
    ) -> Result<Self, FilterError> {
        let mut selected = BTreeMap::new();
        for option in &options {
            if selected.insert(option.id.clone(), false).is_some() {
                return Err(FilterError::DuplicateOptionId(option.id.clone()));
            }
        }

        Ok(Self {
            options,
            selected,
            active_values: BTreeSet::new(),
            search_term: String::new(),
            predicate: Box::new(predicate),
        })
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    /// Sets the selected state of one option.
    ///
    /// Unknown ids are ignored; returns whether the id was known.
    pub fn toggle(&mut self, id: &str, checked: bool) -> bool {
        let Some(state) = self.selected.get_mut(id) else {
            debug!("event=filter_toggle module=filter status=ignored reason=unknown_option");
            return false;
        };
        *state = checked;
        self.active_values = self.derive_active_values();
        true
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.get(id).copied().unwrap_or(false)
    }

    /// Category values of every selected option.
    pub fn active_values(&self) -> &BTreeSet<String> {
        &self.active_values
    }

    /// Deselects every option.
    pub fn clear_selection(&mut self) {
        for state in self.selected.values_mut() {
            *state = false;
        }
        self.active_values.clear();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    fn derive_active_values(&self) -> BTreeSet<String> {
        self.options
            .iter()
            .filter(|option| self.is_selected(&option.id))
            .map(|option| option.value.clone())
            .collect()
    }
}

impl<T: Record + 'static> FilterEngine<T> {
    /// Creates an engine testing `record.category()` against the active values.
    pub fn for_categories(options: Vec<FilterOption>) -> Result<Self, FilterError> {
        Self::new(options, category_predicate::<T>)
    }

    /// Returns the visible records, in input order.
    pub fn apply<'r>(&self, records: &'r [T]) -> Vec<&'r T> {
        let needle = self.search_term.trim().to_lowercase();
        records
            .iter()
            .filter(|record| {
                self.active_values.is_empty() || (self.predicate)(*record, &self.active_values)
            })
            .filter(|record| needle.is_empty() || matches_search(*record, &needle))
            .collect()
    }
}

/// Default predicate: the record's category is one of the active values.
pub fn category_predicate<T: Record>(record: &T, active_values: &BTreeSet<String>) -> bool {
    active_values.contains(record.category())
}

/// Whether any searchable field contains `needle`.
///
/// `needle` must already be trimmed and lowercased.
fn matches_search<T: Record>(record: &T, needle: &str) -> bool {
    record
        .searchable_text()
        .into_iter()
        .any(|value| value.to_lowercase().contains(needle))
}
