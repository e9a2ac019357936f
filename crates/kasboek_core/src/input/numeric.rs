//! Keystroke-level parsing of comma-decimal number input.
//!
//! # Responsibility
//! - Parse in-progress, locale-formatted text into a committed number.
//! - Keep the typed text separately so partial input is never rewritten.
//!
//! # Invariants
//! - Raw text always mirrors the last keystroke, accepted or not.
//! - Rejected input never changes the committed value.
//! - Blank input, `0` and a lone separator commit `0`.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]*$").expect("valid numeric shape regex"));

/// Result of parsing one keystroke's text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseOutcome {
    /// Blank, `0` or a lone separator; commits `0`.
    Zero,
    /// Well-formed number.
    Accepted(f64),
    /// Not number-shaped; prior value stays committed.
    Rejected,
}

impl ParseOutcome {
    /// Value to commit, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Zero => Some(0.0),
            Self::Accepted(value) => Some(value),
            Self::Rejected => None,
        }
    }
}

/// Parses user-typed numeric text with `,` or `.` as decimal separator.
pub fn parse_numeric_text(raw: &str) -> ParseOutcome {
    let trimmed = raw.trim();
    if matches!(trimmed, "" | "0" | "," | ".") {
        return ParseOutcome::Zero;
    }

    let normalized = trimmed.replace(',', ".");
    if !NUMERIC_SHAPE_RE.is_match(&normalized) {
        return ParseOutcome::Rejected;
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => ParseOutcome::Accepted(value),
        _ => ParseOutcome::Rejected,
    }
}

/// Display text for a committed value: `,` decimal mark, empty for zero.
pub fn format_input_number(value: f64) -> String {
    if value == 0.0 {
        return String::new();
    }
    value.to_string().replace('.', ",")
}

/// Input state of one numeric field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericField {
    raw: Option<String>,
    committed: f64,
}

impl NumericField {
    pub fn new(committed: f64) -> Self {
        Self {
            raw: None,
            committed,
        }
    }

    /// Records one keystroke and commits it when it parses.
    pub fn input(&mut self, raw: &str) -> ParseOutcome {
        self.raw = Some(raw.to_string());
        let outcome = parse_numeric_text(raw);
        if let Some(value) = outcome.value() {
            self.committed = value;
        }
        outcome
    }

    /// Text as typed, or `None` when nothing was typed since the last reset.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn committed(&self) -> f64 {
        self.committed
    }

    /// What the input control shows: the raw text, else the formatted value.
    pub fn display_text(&self) -> String {
        match &self.raw {
            Some(raw) => raw.clone(),
            None => format_input_number(self.committed),
        }
    }

    /// Clears the raw buffer and sets a new committed value.
    pub fn reset(&mut self, committed: f64) {
        self.raw = None;
        self.committed = committed;
    }
}
