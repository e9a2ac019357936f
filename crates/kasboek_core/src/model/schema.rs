//! Static per-entity configuration table.
//!
//! # Responsibility
//! - Map every entity kind to its store name, record shape, table columns,
//!   category filter options and form fields.
//! - Replace per-entity hand-written pages with one data-driven table.
//!
//! # Invariants
//! - Store names are unique across kinds.
//! - Filter option ids are unique within one schema.

use crate::filter::engine::FilterOption;
use crate::model::record::{FieldKey, RecordShape};
use serde::{Deserialize, Serialize};

/// Every tracked entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Income,
    Expense,
    FixedExpense,
    Subscription,
    Saving,
    Investment,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Income,
        EntityKind::Expense,
        EntityKind::FixedExpense,
        EntityKind::Subscription,
        EntityKind::Saving,
        EntityKind::Investment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::FixedExpense => "fixed_expense",
            Self::Subscription => "subscription",
            Self::Saving => "saving",
            Self::Investment => "investment",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    pub fn schema(self) -> &'static EntitySchema {
        match self {
            Self::Income => &INCOME,
            Self::Expense => &EXPENSE,
            Self::FixedExpense => &FIXED_EXPENSE,
            Self::Subscription => &SUBSCRIPTION,
            Self::Saving => &SAVING,
            Self::Investment => &INVESTMENT,
        }
    }
}

/// Category filter option as declared in the schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// Input control kind rendered by form collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFieldKind {
    Text,
    Number,
    Date,
    Select,
    Textarea,
}

/// One form input descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub key: FieldKey,
    pub label: &'static str,
    pub kind: FormFieldKind,
    pub placeholder: Option<&'static str>,
    /// Select options; empty for other kinds.
    pub options: &'static [&'static str],
}

/// Static description of one entity page.
#[derive(Debug)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub shape: RecordShape,
    /// Key-value store name holding the persisted record list.
    pub store_name: &'static str,
    pub title: &'static str,
    /// Default column keys, in display order.
    pub columns: &'static [&'static str],
    pub filter_options: &'static [CategoryOption],
    pub form_fields: &'static [FormField],
    pub count_title: &'static str,
    pub total_title: &'static str,
}

impl EntitySchema {
    /// Owned filter options for a `FilterEngine`.
    pub fn filter_options(&self) -> Vec<FilterOption> {
        self.filter_options
            .iter()
            .map(|option| FilterOption::new(option.id, option.label, option.value))
            .collect()
    }

    pub fn form_field(&self, key: FieldKey) -> Option<&'static FormField> {
        self.form_fields.iter().find(|field| field.key == key)
    }
}

const ENTRY_COLUMNS: &[&str] = &["name", "amount", "date", "category"];

const EXPENSE_CATEGORIES: &[&str] = &["Eten", "Transport", "Entertainment", "Anders"];
const INCOME_CATEGORIES: &[&str] = &["Salaris", "Zakgeld", "Anders"];
const FIXED_CATEGORIES: &[&str] = &[
    "Entertainment",
    "Verzekeringen",
    "Credit Card",
    "Internet- TV & Bellen",
];
const INVESTMENT_CATEGORIES: &[&str] = &["Aandelen", "Beleggingsfonds", "Crypto", "ETF"];

const fn text(key: FieldKey, label: &'static str, placeholder: &'static str) -> FormField {
    FormField {
        key,
        label,
        kind: FormFieldKind::Text,
        placeholder: Some(placeholder),
        options: &[],
    }
}

const fn number(key: FieldKey, label: &'static str, placeholder: &'static str) -> FormField {
    FormField {
        key,
        label,
        kind: FormFieldKind::Number,
        placeholder: Some(placeholder),
        options: &[],
    }
}

const fn date() -> FormField {
    FormField {
        key: FieldKey::Date,
        label: "Datum",
        kind: FormFieldKind::Date,
        placeholder: Some("Datum"),
        options: &[],
    }
}

const fn category(options: &'static [&'static str]) -> FormField {
    FormField {
        key: FieldKey::Category,
        label: "Categorie",
        kind: FormFieldKind::Select,
        placeholder: Some("Selecteer categorie"),
        options,
    }
}

const fn entry_fields(categories: &'static [&'static str]) -> [FormField; 4] {
    [
        text(FieldKey::Name, "Naam", "Naam"),
        number(FieldKey::Amount, "Bedrag", "Bedrag (€)"),
        date(),
        category(categories),
    ]
}

const EXPENSE_FIELDS: [FormField; 4] = entry_fields(EXPENSE_CATEGORIES);
const INCOME_FIELDS: [FormField; 4] = entry_fields(INCOME_CATEGORIES);
const FIXED_FIELDS: [FormField; 4] = entry_fields(FIXED_CATEGORIES);

const FIXED_OPTIONS: &[CategoryOption] = &[
    CategoryOption {
        id: "entertainment",
        label: "Entertainment",
        value: "Entertainment",
    },
    CategoryOption {
        id: "verzekeringen",
        label: "Verzekeringen",
        value: "Verzekeringen",
    },
    CategoryOption {
        id: "credit card",
        label: "Credit Card",
        value: "Credit Card",
    },
    CategoryOption {
        id: "internet-tv-bellen",
        label: "Internet- TV & Bellen",
        value: "Internet- TV & Bellen",
    },
];

static INCOME: EntitySchema = EntitySchema {
    kind: EntityKind::Income,
    shape: RecordShape::Entry,
    store_name: "income-storage",
    title: "Inkomen",
    columns: ENTRY_COLUMNS,
    filter_options: &[
        CategoryOption {
            id: "salary",
            label: "Salaris",
            value: "Salaris",
        },
        CategoryOption {
            id: "allowance",
            label: "Zakgeld",
            value: "Zakgeld",
        },
        CategoryOption {
            id: "other",
            label: "Anders",
            value: "Anders",
        },
    ],
    form_fields: &INCOME_FIELDS,
    count_title: "Aantal inkomst bronnen",
    total_title: "Aantal inkomen in €",
};

static EXPENSE: EntitySchema = EntitySchema {
    kind: EntityKind::Expense,
    shape: RecordShape::Entry,
    store_name: "expense-storage",
    title: "Uitgaven",
    columns: ENTRY_COLUMNS,
    filter_options: &[
        CategoryOption {
            id: "food",
            label: "Eten",
            value: "Eten",
        },
        CategoryOption {
            id: "transport",
            label: "Transport",
            value: "Transport",
        },
        CategoryOption {
            id: "entertainment",
            label: "Entertainment",
            value: "Entertainment",
        },
        CategoryOption {
            id: "other",
            label: "Anders",
            value: "Anders",
        },
    ],
    form_fields: &EXPENSE_FIELDS,
    count_title: "Aantal uitgeefposten",
    total_title: "Aantal uitgaven in €",
};

static FIXED_EXPENSE: EntitySchema = EntitySchema {
    kind: EntityKind::FixedExpense,
    shape: RecordShape::Entry,
    store_name: "fixed-expense-storage",
    title: "Vaste lasten",
    columns: ENTRY_COLUMNS,
    filter_options: FIXED_OPTIONS,
    form_fields: &FIXED_FIELDS,
    count_title: "Aantal vaste lasten",
    total_title: "Totaal per maand in €",
};

static SUBSCRIPTION: EntitySchema = EntitySchema {
    kind: EntityKind::Subscription,
    shape: RecordShape::Entry,
    store_name: "subscription-storage",
    title: "Abonnementen",
    columns: ENTRY_COLUMNS,
    filter_options: FIXED_OPTIONS,
    form_fields: &FIXED_FIELDS,
    count_title: "Aantal vaste lasten",
    total_title: "Totaal per maand €",
};

static SAVING: EntitySchema = EntitySchema {
    kind: EntityKind::Saving,
    shape: RecordShape::Saving,
    store_name: "saving-storage",
    title: "Spaarpotjes",
    columns: &["name", "amount", "goal"],
    filter_options: &[],
    form_fields: &[
        text(FieldKey::Name, "Naam", "Naam"),
        number(FieldKey::Goal, "Spaardoel", "Spaardoel (€)"),
        number(FieldKey::Amount, "Bedrag", "Bedrag (€)"),
    ],
    count_title: "Aantal spaarpotjes",
    total_title: "Totaal spaargeld €",
};

static INVESTMENT: EntitySchema = EntitySchema {
    kind: EntityKind::Investment,
    shape: RecordShape::Investment,
    store_name: "investment-storage",
    title: "Investeringen",
    columns: &[
        "name",
        "symbol",
        "amountInvested",
        "unitsReceived",
        "pricePerUnit",
        "date",
        "category",
        "note",
    ],
    filter_options: &[
        CategoryOption {
            id: "etf",
            label: "EFT's",
            value: "ETF",
        },
        CategoryOption {
            id: "crypto",
            label: "Crypto",
            value: "Crypto",
        },
        CategoryOption {
            id: "indexfonds",
            label: "Indexfondsen",
            value: "Beleggingsfonds",
        },
    ],
    form_fields: &[
        text(FieldKey::Name, "Naam", "Naam of $TSLA"),
        text(FieldKey::Symbol, "Symbool", "Symbool (bijv. XRP-EUR)"),
        number(FieldKey::PricePerUnit, "Prijs per stuk", "Prijs per stuk (€)"),
        number(FieldKey::UnitsReceived, "Aantal ontvangen", "Aantal ontvangen"),
        number(
            FieldKey::AmountInvested,
            "Bedrag geïnvesteerd",
            "Automatisch berekend",
        ),
        date(),
        category(INVESTMENT_CATEGORIES),
        FormField {
            key: FieldKey::Note,
            label: "Notitie",
            kind: FormFieldKind::Textarea,
            placeholder: Some("Notitie (optioneel)"),
            options: &[],
        },
    ],
    count_title: "Aantal investeringsbronnen",
    total_title: "Totaal geïnvesteerd in €",
};

#[cfg(test)]
mod tests {
    use super::EntityKind;
    use crate::table::columns::lookup_column;
    use std::collections::HashSet;

    #[test]
    fn store_names_are_unique() {
        let names = EntityKind::ALL
            .iter()
            .map(|kind| kind.schema().store_name)
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), EntityKind::ALL.len());
    }

    #[test]
    fn schema_kind_matches_lookup_key() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.schema().kind, kind);
            assert_eq!(EntityKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn filter_option_ids_are_unique_per_schema() {
        for kind in EntityKind::ALL {
            let options = kind.schema().filter_options;
            let ids = options.iter().map(|option| option.id).collect::<HashSet<_>>();
            assert_eq!(ids.len(), options.len(), "duplicate option id in {kind:?}");
        }
    }

    #[test]
    fn default_columns_are_registered() {
        for kind in EntityKind::ALL {
            for key in kind.schema().columns {
                assert!(lookup_column(key).is_some(), "unregistered column {key}");
            }
        }
    }
}
