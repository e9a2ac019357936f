//! Declarative column registry and column construction.
//!
//! # Responsibility
//! - Resolve column keys to header labels and render transforms.
//! - Append the row actions column (edit/delete) to every table.
//!
//! # Invariants
//! - Unregistered keys are dropped without error.
//! - Column order is the requested key order, then the actions column.
//! - Action controls hand the exact rendered row to the callbacks.

use crate::model::record::{FieldKey, FieldValue, Record};
use crate::table::format::{format_currency, format_date, format_plain_number};
use std::rc::Rc;

pub const ACTIONS_HEADER: &str = "Acties";
pub const EDIT_LABEL: &str = "Bewerk";
pub const DELETE_LABEL: &str = "Verwijder";
const MISSING_PLACEHOLDER: &str = "-";

/// Row-level callback shared by every actions cell of one table.
pub type RowCallback<T> = Rc<dyn Fn(&T)>;

/// Render transform applied to one field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    /// Text as-is, numbers in plain notation.
    Raw,
    /// Dutch euro formatting; `-` when absent.
    Currency,
    /// `D-M-YYYY` from an ISO date.
    Date,
    /// Upper-cased text; empty for non-text.
    Uppercase,
    /// Text when present and non-empty, otherwise `-`.
    OptionalText,
}

/// One registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: FieldKey,
    pub header: &'static str,
    pub render: RenderKind,
}

static REGISTRY: &[ColumnSpec] = &[
    ColumnSpec {
        key: FieldKey::Name,
        header: "Naam",
        render: RenderKind::Raw,
    },
    ColumnSpec {
        key: FieldKey::Symbol,
        header: "Symbol",
        render: RenderKind::Uppercase,
    },
    ColumnSpec {
        key: FieldKey::Amount,
        header: "Bedrag",
        render: RenderKind::Currency,
    },
    ColumnSpec {
        key: FieldKey::AmountInvested,
        header: "Bedrag",
        render: RenderKind::Currency,
    },
    ColumnSpec {
        key: FieldKey::UnitsReceived,
        header: "Aantal ontvangen",
        render: RenderKind::Raw,
    },
    ColumnSpec {
        key: FieldKey::PricePerUnit,
        header: "Prijs per stuk",
        render: RenderKind::Raw,
    },
    ColumnSpec {
        key: FieldKey::Date,
        header: "Datum",
        render: RenderKind::Date,
    },
    ColumnSpec {
        key: FieldKey::Category,
        header: "Categorie",
        render: RenderKind::Raw,
    },
    ColumnSpec {
        key: FieldKey::Note,
        header: "Notitie",
        render: RenderKind::OptionalText,
    },
    ColumnSpec {
        key: FieldKey::Goal,
        header: "Spaardoel",
        render: RenderKind::Currency,
    },
];

/// Looks up a column key in the static registry.
pub fn lookup_column(key: &str) -> Option<&'static ColumnSpec> {
    let field = FieldKey::parse(key)?;
    REGISTRY.iter().find(|spec| spec.key == field)
}

impl RenderKind {
    fn render(self, value: Option<FieldValue<'_>>) -> String {
        match (self, value) {
            (Self::Raw, Some(FieldValue::Text(text))) => text.to_string(),
            (Self::Raw, Some(FieldValue::Number(number))) => format_plain_number(number),
            (Self::Currency, Some(FieldValue::Number(number))) => format_currency(number),
            (Self::Currency, Some(FieldValue::Text(text))) => {
                format_currency(text.trim().parse::<f64>().unwrap_or(f64::NAN))
            }
            (Self::Date, Some(FieldValue::Text(text))) => format_date(text),
            (Self::Uppercase, Some(FieldValue::Text(text))) => text.to_uppercase(),
            (Self::OptionalText, Some(FieldValue::Text(text))) if !text.is_empty() => {
                text.to_string()
            }
            (Self::Currency | Self::OptionalText, _) => MISSING_PLACEHOLDER.to_string(),
            (Self::Raw | Self::Date | Self::Uppercase, _) => String::new(),
        }
    }
}

/// Edit/delete controls bound to one row.
pub struct RowActions<'r, T> {
    row: &'r T,
    on_edit: &'r RowCallback<T>,
    on_delete: &'r RowCallback<T>,
}

impl<'r, T> RowActions<'r, T> {
    pub fn row(&self) -> &'r T {
        self.row
    }

    /// Invokes the edit callback with the full row.
    pub fn edit(&self) {
        (self.on_edit)(self.row);
    }

    /// Invokes the delete callback with the full row.
    pub fn delete(&self) {
        (self.on_delete)(self.row);
    }

    pub fn labels(&self) -> [&'static str; 2] {
        [EDIT_LABEL, DELETE_LABEL]
    }
}

/// Rendered content of one cell.
pub enum Cell<'r, T> {
    Text(String),
    Actions(RowActions<'r, T>),
}

impl<T> Cell<'_, T> {
    /// Plain-text rendering; action cells render their control labels.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Actions(actions) => actions.labels().join(" | "),
        }
    }
}

enum ColumnKind<T> {
    Field(&'static ColumnSpec),
    Actions {
        on_edit: RowCallback<T>,
        on_delete: RowCallback<T>,
    },
}

/// One renderable column.
pub struct Column<T> {
    header: &'static str,
    kind: ColumnKind<T>,
}

impl<T: Record> Column<T> {
    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn is_actions(&self) -> bool {
        matches!(self.kind, ColumnKind::Actions { .. })
    }

    pub fn render<'r>(&'r self, row: &'r T) -> Cell<'r, T> {
        match &self.kind {
            ColumnKind::Field(spec) => Cell::Text(spec.render.render(row.field(spec.key))),
            ColumnKind::Actions { on_edit, on_delete } => Cell::Actions(RowActions {
                row,
                on_edit,
                on_delete,
            }),
        }
    }
}

/// Builds columns for one record type with shared row callbacks.
pub struct ColumnFormatter<T> {
    on_edit: RowCallback<T>,
    on_delete: RowCallback<T>,
}

impl<T: Record> ColumnFormatter<T> {
    pub fn new(on_edit: impl Fn(&T) + 'static, on_delete: impl Fn(&T) + 'static) -> Self {
        Self {
            on_edit: Rc::new(on_edit),
            on_delete: Rc::new(on_delete),
        }
    }

    /// Resolves `keys` through the registry and appends the actions column.
    pub fn columns<K: AsRef<str>>(&self, keys: &[K]) -> Vec<Column<T>> {
        let mut columns = keys
            .iter()
            .filter_map(|key| lookup_column(key.as_ref()))
            .map(|spec| Column {
                header: spec.header,
                kind: ColumnKind::Field(spec),
            })
            .collect::<Vec<_>>();

        columns.push(Column {
            header: ACTIONS_HEADER,
            kind: ColumnKind::Actions {
                on_edit: Rc::clone(&self.on_edit),
                on_delete: Rc::clone(&self.on_delete),
            },
        });
        columns
    }
}
