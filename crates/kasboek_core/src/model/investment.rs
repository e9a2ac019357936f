//! Investment record.
//!
//! # Invariants
//! - When `amountInvested` is not explicitly provided, it equals
//!   `round2(pricePerUnit * unitsReceived)`.
//! - `amount()` projects `amount_invested`; investments carry no separate amount.

use crate::model::record::{round2, FieldKey, FieldValue, Record, RecordId, RecordShape};
use serde::{Deserialize, Serialize};

/// One purchase of a stock, fund or crypto asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "InvestmentWire")]
pub struct Investment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    /// Ticker such as `XRP-EUR`; rendered upper-cased.
    pub symbol: String,
    pub price_per_unit: f64,
    pub units_received: f64,
    /// Derived from unit price and units unless set explicitly.
    pub amount_invested: f64,
    pub date: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Deserialization shape; `amountInvested` may be omitted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvestmentWire {
    #[serde(default)]
    id: Option<RecordId>,
    name: String,
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    price_per_unit: f64,
    #[serde(default)]
    units_received: f64,
    #[serde(default)]
    amount_invested: Option<f64>,
    #[serde(default)]
    date: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    note: Option<String>,
}

impl From<InvestmentWire> for Investment {
    fn from(wire: InvestmentWire) -> Self {
        let amount_invested = wire
            .amount_invested
            .unwrap_or_else(|| round2(wire.price_per_unit * wire.units_received));
        Self {
            id: wire.id,
            name: wire.name,
            symbol: wire.symbol,
            price_per_unit: wire.price_per_unit,
            units_received: wire.units_received,
            amount_invested,
            date: wire.date,
            category: wire.category,
            note: wire.note,
        }
    }
}

impl Investment {
    /// Creates a draft investment with the derived invested amount.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        price_per_unit: f64,
        units_received: f64,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let mut investment = Self {
            id: None,
            name: name.into(),
            symbol: symbol.into(),
            price_per_unit,
            units_received,
            amount_invested: 0.0,
            date: date.into(),
            category: category.into(),
            note: None,
        };
        investment.recompute_amount_invested();
        investment
    }

    /// Overwrites `amount_invested` with `round2(price * units)`.
    pub fn recompute_amount_invested(&mut self) {
        self.amount_invested = round2(self.price_per_unit * self.units_received);
    }
}

impl Record for Investment {
    const SHAPE: RecordShape = RecordShape::Investment;

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
        self.amount_invested
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
            FieldKey::Symbol => Some(FieldValue::Text(&self.symbol)),
            FieldKey::PricePerUnit => Some(FieldValue::Number(self.price_per_unit)),
            FieldKey::UnitsReceived => Some(FieldValue::Number(self.units_received)),
            FieldKey::AmountInvested => Some(FieldValue::Number(self.amount_invested)),
            FieldKey::Date => Some(FieldValue::Text(&self.date)),
            FieldKey::Category => Some(FieldValue::Text(&self.category)),
            FieldKey::Note => self.note.as_deref().map(FieldValue::Text),
            FieldKey::Amount | FieldKey::Goal => None,
        }
    }

    fn searchable_text(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.symbol.as_str(),
            self.date.as_str(),
            self.category.as_str(),
        ];
        if let Some(note) = self.note.as_deref() {
            fields.push(note);
        }
        fields
    }

    fn set_number(&mut self, key: FieldKey, value: f64) -> bool {
        match key {
            FieldKey::PricePerUnit => self.price_per_unit = value,
            FieldKey::UnitsReceived => self.units_received = value,
            FieldKey::AmountInvested => self.amount_invested = value,
            _ => return false,
        }
        true
    }

    fn set_text(&mut self, key: FieldKey, value: String) -> bool {
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::Symbol => self.symbol = value,
            FieldKey::Date => self.date = value,
            FieldKey::Category => self.category = value,
            FieldKey::Note => self.note = Some(value).filter(|note| !note.is_empty()),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Investment;
    use crate::model::record::{FieldKey, Record};

    #[test]
    fn new_derives_rounded_invested_amount() {
        let investment = Investment::new("Tesla", "tsla", 12.50, 3.0, "2024-01-02", "Aandelen");
        assert_eq!(investment.amount_invested, 37.5);

        let tiny = Investment::new("Fractie", "frc", 0.333_333, 3.0, "2024-01-02", "Crypto");
        assert_eq!(tiny.amount_invested, 1.0);
    }

    #[test]
    fn empty_note_is_stored_as_absent() {
        let mut investment = Investment::default();
        assert!(investment.set_text(FieldKey::Note, String::new()));
        assert_eq!(investment.note, None);
        assert!(investment.field(FieldKey::Note).is_none());
    }
}
