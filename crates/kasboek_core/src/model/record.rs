//! Shared record contract for every tracked entity.
//!
//! # Responsibility
//! - Define the identity, field-access and search surface the generic
//!   store/filter/table layers rely on.
//! - Name every field that columns, filters and forms can address.
//!
//! # Invariants
//! - `id` is assigned once and never changes afterwards.
//! - `searchable_text` lists string fields only; numbers are never searched.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one record inside its store.
pub type RecordId = Uuid;

/// Concrete record layout behind an entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordShape {
    /// `name/amount/date/category`.
    Entry,
    /// Entry plus optional savings goal.
    Saving,
    /// Symbol, unit price, units and derived invested amount.
    Investment,
}

/// Addressable record field.
///
/// Keys use the camelCase names of the persisted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Symbol,
    Amount,
    AmountInvested,
    UnitsReceived,
    PricePerUnit,
    Date,
    Category,
    Note,
    Goal,
}

impl FieldKey {
    pub const ALL: [FieldKey; 10] = [
        FieldKey::Name,
        FieldKey::Symbol,
        FieldKey::Amount,
        FieldKey::AmountInvested,
        FieldKey::UnitsReceived,
        FieldKey::PricePerUnit,
        FieldKey::Date,
        FieldKey::Category,
        FieldKey::Note,
        FieldKey::Goal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::Amount => "amount",
            Self::AmountInvested => "amountInvested",
            Self::UnitsReceived => "unitsReceived",
            Self::PricePerUnit => "pricePerUnit",
            Self::Date => "date",
            Self::Category => "category",
            Self::Note => "note",
            Self::Goal => "goal",
        }
    }

    /// Resolves a payload key. Unknown keys return `None`.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == key)
    }
}

/// Borrowed field value as seen by renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// Contract shared by every persisted record type.
pub trait Record: Clone {
    /// Layout tag used to check a record type against an entity kind.
    const SHAPE: RecordShape;

    /// Returns the assigned id, or `None` for drafts.
    fn id(&self) -> Option<RecordId>;

    /// Assigns the stable id. Called by the store exactly once per record.
    fn assign_id(&mut self, id: RecordId);

    fn name(&self) -> &str;

    /// Monetary value used for totals.
    fn amount(&self) -> f64;

    fn date(&self) -> &str;

    fn category(&self) -> &str;

    /// Reads one field. Fields the record does not carry return `None`.
    fn field(&self, key: FieldKey) -> Option<FieldValue<'_>>;

    /// String fields scanned by free-text search.
    fn searchable_text(&self) -> Vec<&str>;

    /// Writes one numeric field. Returns `false` when the record has no such field.
    fn set_number(&mut self, key: FieldKey, value: f64) -> bool;

    /// Writes one text field. Returns `false` when the record has no such field.
    fn set_text(&mut self, key: FieldKey, value: String) -> bool;

    /// Whether `key` is a numeric field of this record type.
    fn has_number(&self, key: FieldKey) -> bool {
        matches!(self.field(key), Some(FieldValue::Number(_)))
    }
}

/// Rounds the binary value half away from zero to two decimals.
///
/// Stored derived amounts use this, so `round2(1.005)` is `1.0` because
/// `1.005` is stored just below the half. Display rounding in
/// [`crate::table::format::format_currency`] works on the decimal form
/// instead and shows `€ 1,01`; keep the two separate.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
