//! Base entry and savings records.
//!
//! `Entry` backs income, expenses, fixed expenses and subscriptions. They only
//! differ in store name and category vocabulary, which live in the schema table.

use crate::model::record::{FieldKey, FieldValue, Record, RecordId, RecordShape};
use serde::{Deserialize, Serialize};

/// One income, expense, fixed expense or subscription line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// `None` until the record is appended to a store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    /// Semantically non-negative; not enforced.
    pub amount: f64,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub category: String,
}

impl Entry {
    /// Creates a draft entry without an id.
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            amount,
            date: date.into(),
            category: category.into(),
        }
    }
}

impl Record for Entry {
    const SHAPE: RecordShape = RecordShape::Entry;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn field(&self, key: FieldKey) -> Option<FieldValue<'_>> {
        match key {
            FieldKey::Name => Some(FieldValue::Text(&self.name)),
            FieldKey::Amount => Some(FieldValue::Number(self.amount)),
            FieldKey::Date => Some(FieldValue::Text(&self.date)),
            FieldKey::Category => Some(FieldValue::Text(&self.category)),
            _ => None,
        }
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![&self.name, &self.date, &self.category]
    }

    fn set_number(&mut self, key: FieldKey, value: f64) -> bool {
        match key {
            FieldKey::Amount => {
                self.amount = value;
                true
            }
            _ => false,
        }
    }

    fn set_text(&mut self, key: FieldKey, value: String) -> bool {
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::Date => self.date = value,
            FieldKey::Category => self.category = value,
            _ => return false,
        }
        true
    }
}

/// One savings pot with an optional target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Saving {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub amount: f64,
    /// Target amount; `None` means no goal was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<f64>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
}

impl Saving {
    pub fn new(name: impl Into<String>, amount: f64, goal: Option<f64>) -> Self {
        Self {
            id: None,
            name: name.into(),
            amount,
            goal,
            date: String::new(),
            category: String::new(),
        }
    }

    /// Progress towards `goal` in percent, clamped to `0..=100`.
    ///
    /// Returns `0.0` when no positive goal is set.
    pub fn progress_percent(&self) -> f64 {
        match self.goal {
            Some(goal) if goal > 0.0 => (self.amount / goal * 100.0).clamp(0.0, 100.0),
            _ => 0.0,
        }
    }
}

impl Record for Saving {
    const SHAPE: RecordShape = RecordShape::Saving;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn field(&self, key: FieldKey) -> Option<FieldValue<'_>> {
        match key {
            FieldKey::Name => Some(FieldValue::Text(&self.name)),
            FieldKey::Amount => Some(FieldValue::Number(self.amount)),
            FieldKey::Goal => self.goal.map(FieldValue::Number),
            FieldKey::Date => Some(FieldValue::Text(&self.date)),
            FieldKey::Category => Some(FieldValue::Text(&self.category)),
            _ => None,
        }
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![&self.name, &self.date, &self.category]
    }

    fn set_number(&mut self, key: FieldKey, value: f64) -> bool {
        match key {
            FieldKey::Amount => self.amount = value,
            FieldKey::Goal => self.goal = Some(value),
            _ => return false,
        }
        true
    }

    fn set_text(&mut self, key: FieldKey, value: String) -> bool {
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::Date => self.date = value,
            FieldKey::Category => self.category = value,
            _ => return false,
        }
        true
    }

    // `goal` is optional, so `field` alone cannot tell whether it is numeric.
    fn has_number(&self, key: FieldKey) -> bool {
        matches!(key, FieldKey::Amount | FieldKey::Goal)
    }
}
