//! Draft record held in transient form state.
//!
//! # Responsibility
//! - Merge text and numeric keystrokes into an in-progress record.
//! - Keep derived fields in sync while their drivers are edited.
//!
//! # Invariants
//! - While a draft has both `pricePerUnit` and `unitsReceived`, any committed
//!   change to either overwrites `amountInvested` with `round2(price * units)`.
//! - Resetting or submitting clears every raw input buffer.

use crate::input::numeric::{format_input_number, NumericField, ParseOutcome};
use crate::model::record::{round2, FieldKey, FieldValue, Record};
use log::debug;
use std::collections::BTreeMap;

/// Form state for one record being added or edited.
#[derive(Debug, Clone)]
pub struct DraftForm<T: Record> {
    initial: T,
    draft: T,
    numeric_inputs: BTreeMap<FieldKey, NumericField>,
}

impl<T: Record> DraftForm<T> {
    /// Starts a form from `initial`; reset returns to this record.
    ///
    /// For edits, pass the stored record so its id survives submission.
    pub fn new(initial: T) -> Self {
        Self {
            draft: initial.clone(),
            initial,
            numeric_inputs: BTreeMap::new(),
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Feeds raw keystroke text into a numeric field.
    ///
    /// Fields the record does not carry are ignored and report `Rejected`.
    pub fn input_number(&mut self, key: FieldKey, raw: &str) -> ParseOutcome {
        if !self.draft.has_number(key) {
            debug!(
                "event=draft_input module=input status=ignored field={} reason=not_numeric",
                key.as_str()
            );
            return ParseOutcome::Rejected;
        }

        let current = number_value(&self.draft, key);
        let outcome = self
            .numeric_inputs
            .entry(key)
            .or_insert_with(|| NumericField::new(current))
            .input(raw);

        if let Some(value) = outcome.value() {
            self.commit_number(key, value);
        }
        outcome
    }

    /// Replaces a text field value. Returns `false` for unknown fields.
    pub fn input_text(&mut self, key: FieldKey, value: impl Into<String>) -> bool {
        self.draft.set_text(key, value.into())
    }

    /// Raw text typed into a numeric field since the last reset.
    pub fn raw_text(&self, key: FieldKey) -> Option<&str> {
        self.numeric_inputs.get(&key).and_then(NumericField::raw)
    }

    /// Text the input control for `key` should show.
    pub fn display_text(&self, key: FieldKey) -> String {
        if let Some(raw) = self.raw_text(key) {
            return raw.to_string();
        }
        match self.draft.field(key) {
            Some(FieldValue::Number(value)) => format_input_number(value),
            Some(FieldValue::Text(text)) => text.to_string(),
            None => String::new(),
        }
    }

    /// Restores the initial record and clears raw buffers.
    pub fn reset(&mut self) {
        self.draft = self.initial.clone();
        self.numeric_inputs.clear();
    }

    /// Hands out the assembled record and resets the form.
    pub fn submit(&mut self) -> T {
        let submitted = std::mem::replace(&mut self.draft, self.initial.clone());
        self.numeric_inputs.clear();
        submitted
    }

    fn commit_number(&mut self, key: FieldKey, value: f64) {
        self.draft.set_number(key, value);

        if matches!(key, FieldKey::PricePerUnit | FieldKey::UnitsReceived) {
            if let (Some(FieldValue::Number(price)), Some(FieldValue::Number(units))) = (
                self.draft.field(FieldKey::PricePerUnit),
                self.draft.field(FieldKey::UnitsReceived),
            ) {
                let invested = round2(price * units);
                self.draft.set_number(FieldKey::AmountInvested, invested);
                // The derived field is not independently editable while driven.
                self.numeric_inputs.remove(&FieldKey::AmountInvested);
            }
        }
    }
}

fn number_value<T: Record>(record: &T, key: FieldKey) -> f64 {
    match record.field(key) {
        Some(FieldValue::Number(value)) => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::DraftForm;
    use crate::input::numeric::ParseOutcome;
    use crate::model::entry::Entry;
    use crate::model::record::FieldKey;

    #[test]
    fn numeric_input_on_text_field_is_rejected() {
        let mut form = DraftForm::new(Entry::default());
        assert_eq!(form.input_number(FieldKey::Name, "12"), ParseOutcome::Rejected);
        assert_eq!(form.raw_text(FieldKey::Name), None);
    }

    #[test]
    fn display_text_falls_back_to_committed_value() {
        let mut form = DraftForm::new(Entry::new("Lunch", 8.5, "2024-01-01", "Eten"));
        assert_eq!(form.display_text(FieldKey::Amount), "8,5");

        form.input_number(FieldKey::Amount, "9,");
        assert_eq!(form.display_text(FieldKey::Amount), "9,");
        assert_eq!(form.draft().amount, 9.0);
    }
}
