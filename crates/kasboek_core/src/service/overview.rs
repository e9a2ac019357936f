//! Overview card figures per entity.

use crate::model::entry::Saving;
use crate::model::record::Record;
use crate::model::schema::EntityKind;
use crate::table::format::format_currency;

/// One summary card: a title and a display-ready value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewCard {
    pub title: String,
    pub value: String,
}

impl OverviewCard {
    fn new(title: &str, value: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
        }
    }
}

/// Sum of `amount()` over `records`.
pub fn total_amount<T: Record>(records: &[T]) -> f64 {
    records.iter().map(|record| record.amount()).sum()
}

/// Number of records whose category equals `category`.
pub fn category_count<T: Record>(records: &[T], category: &str) -> usize {
    records
        .iter()
        .filter(|record| record.category() == category)
        .count()
}

/// Count and total cards, plus the per-kind extras.
///
/// Totals cover every record in the store, not only the filtered rows.
pub fn overview_cards<T: Record>(kind: EntityKind, records: &[T]) -> Vec<OverviewCard> {
    let schema = kind.schema();
    let total = total_amount(records);
    let mut cards = vec![
        OverviewCard::new(schema.count_title, records.len().to_string()),
        OverviewCard::new(schema.total_title, format_currency(total)),
    ];

    match kind {
        EntityKind::Subscription => {
            cards.push(OverviewCard::new(
                "Totaal per jaar (actief)",
                format_currency(total * 12.0),
            ));
        }
        EntityKind::Investment => {
            for (title, category) in [
                ("Aantal cryptovaluta's", "Crypto"),
                ("Aantal EFT's", "ETF"),
                ("Aantal indexfondsen", "Beleggingsfonds"),
            ] {
                cards.push(OverviewCard::new(
                    title,
                    category_count(records, category).to_string(),
                ));
            }
        }
        _ => {}
    }

    cards
}

/// Per-pot progress cards for savings: `name → "€ amount / € goal (pct%)"`.
pub fn savings_progress_cards(savings: &[Saving]) -> Vec<OverviewCard> {
    savings
        .iter()
        .map(|saving| {
            let goal = saving
                .goal
                .map(format_currency)
                .unwrap_or_else(|| "-".to_string());
            OverviewCard {
                title: saving.name.clone(),
                value: format!(
                    "{} / {} ({:.0}%)",
                    format_currency(saving.amount),
                    goal,
                    saving.progress_percent()
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{overview_cards, savings_progress_cards};
    use crate::model::entry::{Entry, Saving};
    use crate::model::investment::Investment;
    use crate::model::schema::EntityKind;

    #[test]
    fn expense_overview_counts_and_totals() {
        let expenses = vec![
            Entry::new("Boodschappen", 1200.0, "2024-01-01", "Eten"),
            Entry::new("Trein", 80.0, "2024-01-02", "Transport"),
        ];

        let cards = overview_cards(EntityKind::Expense, &expenses);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Aantal uitgeefposten");
        assert_eq!(cards[0].value, "2");
        assert_eq!(cards[1].title, "Aantal uitgaven in €");
        assert_eq!(cards[1].value, "€\u{a0}1.280,00");
    }

    #[test]
    fn investment_overview_adds_category_counts() {
        let investments = vec![
            Investment::new("Bitcoin", "btc-eur", 100.0, 0.5, "2024-01-01", "Crypto"),
            Investment::new("World ETF", "vwrl", 100.0, 2.0, "2024-01-02", "ETF"),
            Investment::new("Ripple", "xrp-eur", 0.5, 10.0, "2024-01-03", "Crypto"),
        ];

        let cards = overview_cards(EntityKind::Investment, &investments);
        assert_eq!(cards[1].value, "€\u{a0}255,00");
        assert_eq!(cards[2].title, "Aantal cryptovaluta's");
        assert_eq!(cards[2].value, "2");
        assert_eq!(cards[3].value, "1");
        assert_eq!(cards[4].value, "0");
    }

    #[test]
    fn savings_progress_shows_goal_and_percentage() {
        let cards = savings_progress_cards(&[
            Saving::new("Vakantie", 250.0, Some(1000.0)),
            Saving::new("Buffer", 50.0, None),
        ]);
        assert_eq!(cards[0].value, "€\u{a0}250,00 / €\u{a0}1.000,00 (25%)");
        assert_eq!(cards[1].value, "€\u{a0}50,00 / - (0%)");
    }
}
