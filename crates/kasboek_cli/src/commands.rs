//! Command runners, generic over the record type of an entity.

use clap::Args;
use kasboek_core::table::format::INVALID_DATE;
use kasboek_core::{
    format_date, overview_cards, AppContext, ColumnFormatter, DraftForm, EntityKind, EntitySchema,
    FieldKey, FieldValue, FilterEngine, FormFieldKind, OverviewCard, ParseOutcome, Record, RecordId,
    TableView,
};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Field flags shared by `add` and `edit`.
///
/// Numbers are taken as typed text so `12,5` and `12.5` both parse.
#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub amount: Option<String>,
    /// ISO date, YYYY-MM-DD (add defaults to today)
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Investment ticker symbol
    #[arg(long)]
    pub symbol: Option<String>,
    /// Investment price per unit
    #[arg(long)]
    pub price: Option<String>,
    /// Investment units received
    #[arg(long)]
    pub units: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
    /// Savings goal
    #[arg(long)]
    pub goal: Option<String>,
}

impl RecordArgs {
    /// Provided flags as `(field, flag name, value)`.
    fn provided(self) -> Vec<(FieldKey, &'static str, String)> {
        [
            (FieldKey::Name, "name", self.name),
            (FieldKey::Amount, "amount", self.amount),
            (FieldKey::Date, "date", self.date),
            (FieldKey::Category, "category", self.category),
            (FieldKey::Symbol, "symbol", self.symbol),
            (FieldKey::PricePerUnit, "price", self.price),
            (FieldKey::UnitsReceived, "units", self.units),
            (FieldKey::Note, "note", self.note),
            (FieldKey::Goal, "goal", self.goal),
        ]
        .into_iter()
        .filter_map(|(key, flag, value)| value.map(|value| (key, flag, value)))
        .collect()
    }
}

pub enum Action {
    List {
        filters: Vec<String>,
        search: Option<String>,
        columns: Vec<String>,
    },
    Add(RecordArgs),
    Edit(RecordId, RecordArgs),
    Remove(RecordId),
    Overview,
}

/// Runs `action` against the store of `kind` and returns the text to print.
///
/// `extra_cards` contributes shape-specific overview cards. Ignored input
/// (unknown filters, rejected numbers) is reported as trailing `note:` lines.
pub fn run<T>(
    ctx: &AppContext,
    kind: EntityKind,
    action: Action,
    extra_cards: impl Fn(&[T]) -> Vec<OverviewCard>,
) -> Result<String, String>
where
    T: Record + Default + Serialize + DeserializeOwned + 'static,
{
    let schema = kind.schema();
    let mut store = ctx.store::<T>(kind).map_err(|err| err.to_string())?;
    debug!(
        "event=cli_command module=cli status=start entity={}",
        kind.as_str()
    );

    let (output, notes) = match action {
        Action::List {
            filters,
            search,
            columns,
        } => list(schema, store.list(), &filters, search, &columns)?,
        Action::Add(fields) => {
            let mut initial = T::default();
            initial.set_text(FieldKey::Date, today());
            let (record, notes) = build_record(schema, initial, fields)?;
            let id = store.append(record).map_err(|err| err.to_string())?;
            (format!("added {id}"), notes)
        }
        Action::Edit(id, fields) => match store.get(id).cloned() {
            Some(existing) => {
                let (record, notes) = build_record(schema, existing, fields)?;
                store
                    .replace_by_id(id, record)
                    .map_err(|err| err.to_string())?;
                (format!("updated {id}"), notes)
            }
            None => (format!("no {} record with id {id}", kind.as_str()), Vec::new()),
        },
        Action::Remove(id) => {
            let removed = store.remove_by_id(id).map_err(|err| err.to_string())?;
            let output = if removed {
                format!("removed {id}")
            } else {
                format!("no {} record with id {id}", kind.as_str())
            };
            (output, Vec::new())
        }
        Action::Overview => {
            let mut cards = overview_cards(kind, store.list());
            cards.extend(extra_cards(store.list()));
            (render_cards(&cards), Vec::new())
        }
    };

    Ok(with_notes(output, &notes))
}

fn list<T>(
    schema: &EntitySchema,
    records: &[T],
    filters: &[String],
    search: Option<String>,
    columns: &[String],
) -> Result<(String, Vec<String>), String>
where
    T: Record + 'static,
{
    let mut engine =
        FilterEngine::<T>::for_categories(schema.filter_options()).map_err(|err| err.to_string())?;
    let mut notes = Vec::new();
    for id in filters {
        if !engine.toggle(id, true) {
            let known = schema
                .filter_options
                .iter()
                .map(|option| option.id)
                .collect::<Vec<_>>();
            notes.push(format!(
                "ignored unknown filter `{id}`; known: {}",
                known.join(", ")
            ));
        }
    }
    if let Some(search) = search {
        engine.set_search_term(search);
    }
    let visible = engine.apply(records);

    // A terminal cannot click the action cells; row callbacks are inert here.
    let formatter = ColumnFormatter::<T>::new(|_| {}, |_| {});
    let columns = if columns.is_empty() {
        formatter.columns(schema.columns)
    } else {
        formatter.columns(columns)
    };
    let mut table = TableView::build(&columns, &visible);

    table.headers.insert(0, "Id".to_string());
    for (row, record) in table.rows.iter_mut().zip(&visible) {
        let id = record.id().map(|id| id.to_string()).unwrap_or_default();
        row.insert(0, id);
    }

    Ok((format!("{}\n\n{}", schema.title, table.to_text()), notes))
}

/// Applies `fields` to `initial` through a draft form laid out by `schema`.
///
/// Fields are entered in form order, so an investment's price lands before
/// its units and the derived invested amount follows both. Flags outside the
/// form are an error; rejected numbers keep the previous value and add a note.
fn build_record<T: Record>(
    schema: &EntitySchema,
    initial: T,
    fields: RecordArgs,
) -> Result<(T, Vec<String>), String> {
    let mut provided = fields.provided();
    if let Some((_, flag, _)) = provided
        .iter()
        .find(|(key, _, _)| schema.form_field(*key).is_none())
    {
        return Err(format!(
            "--{flag} does not apply to {}",
            schema.kind.as_str()
        ));
    }

    let mut form = DraftForm::new(initial);
    let mut notes = Vec::new();
    for field in schema.form_fields {
        let Some(index) = provided.iter().position(|(key, _, _)| *key == field.key) else {
            continue;
        };
        let (key, _, value) = provided.swap_remove(index);

        match field.kind {
            FormFieldKind::Number => {
                if form.input_number(key, &value) == ParseOutcome::Rejected {
                    notes.push(format!(
                        "`{value}` is not a number for {}; kept {}",
                        field.label,
                        committed_text(&form, key)
                    ));
                }
            }
            FormFieldKind::Select => {
                if !field.options.contains(&value.as_str()) {
                    notes.push(format!(
                        "{} `{value}` is not one of: {}",
                        field.label,
                        field.options.join(", ")
                    ));
                }
                form.input_text(key, value);
            }
            FormFieldKind::Date => {
                if format_date(&value) == INVALID_DATE {
                    notes.push(format!("{} `{value}` is not a YYYY-MM-DD date", field.label));
                }
                form.input_text(key, value);
            }
            FormFieldKind::Text | FormFieldKind::Textarea => {
                form.input_text(key, value);
            }
        }
    }

    Ok((form.submit(), notes))
}

fn committed_text<T: Record>(form: &DraftForm<T>, key: FieldKey) -> String {
    match form.draft().field(key) {
        Some(FieldValue::Number(value)) => value.to_string().replace('.', ","),
        _ => "no value".to_string(),
    }
}

fn with_notes(output: String, notes: &[String]) -> String {
    notes.iter().fold(output, |mut text, note| {
        text.push_str("\nnote: ");
        text.push_str(note);
        text
    })
}

fn render_cards(cards: &[OverviewCard]) -> String {
    let width = cards
        .iter()
        .map(|card| card.title.chars().count())
        .max()
        .unwrap_or(0);
    cards
        .iter()
        .map(|card| {
            let padding = width - card.title.chars().count();
            format!("{}{}  {}", card.title, " ".repeat(padding), card.value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::{build_record, list, render_cards, with_notes, RecordArgs};
    use kasboek_core::{EntityKind, Entry, Investment, OverviewCard, Saving};

    #[test]
    fn build_record_parses_comma_decimals() {
        let (entry, notes) = build_record(
            EntityKind::Expense.schema(),
            Entry::default(),
            RecordArgs {
                name: Some("Boodschappen".to_string()),
                amount: Some("12,5".to_string()),
                category: Some("Eten".to_string()),
                ..RecordArgs::default()
            },
        )
        .unwrap();
        assert_eq!(entry.name, "Boodschappen");
        assert_eq!(entry.amount, 12.5);
        assert!(notes.is_empty());
    }

    #[test]
    fn build_record_derives_invested_amount() {
        let (investment, _) = build_record(
            EntityKind::Investment.schema(),
            Investment::default(),
            RecordArgs {
                units: Some("3".to_string()),
                price: Some("12.50".to_string()),
                ..RecordArgs::default()
            },
        )
        .unwrap();
        assert_eq!(investment.amount_invested, 37.5);
    }

    #[test]
    fn build_record_rejects_flags_outside_the_form() {
        let err = build_record(
            EntityKind::Income.schema(),
            Entry::default(),
            RecordArgs {
                goal: Some("100".to_string()),
                ..RecordArgs::default()
            },
        )
        .unwrap_err();
        assert!(err.contains("--goal"));
    }

    #[test]
    fn rejected_number_keeps_previous_value_with_a_note() {
        let (saving, notes) = build_record(
            EntityKind::Saving.schema(),
            Saving::new("Vakantie", 250.0, Some(1000.0)),
            RecordArgs {
                amount: Some("12.5.3".to_string()),
                ..RecordArgs::default()
            },
        )
        .unwrap();

        assert_eq!(saving.amount, 250.0);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("12.5.3"));
        assert!(notes[0].contains("kept 250"));
    }

    #[test]
    fn off_list_category_and_bad_date_are_kept_with_notes() {
        let (entry, notes) = build_record(
            EntityKind::Expense.schema(),
            Entry::default(),
            RecordArgs {
                category: Some("Vakantie".to_string()),
                date: Some("gisteren".to_string()),
                ..RecordArgs::default()
            },
        )
        .unwrap();

        assert_eq!(entry.category, "Vakantie");
        assert_eq!(entry.date, "gisteren");
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn unknown_filter_is_ignored_with_a_note() {
        let records = vec![
            Entry::new("Bakker", 6.5, "2024-03-03", "Eten"),
            Entry::new("Trein", 12.0, "2024-03-02", "Transport"),
        ];

        let (table, notes) = list(
            EntityKind::Expense.schema(),
            &records,
            &["groceries".to_string()],
            None,
            &[],
        )
        .unwrap();

        assert!(table.contains("Bakker"));
        assert!(table.contains("Trein"));
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("groceries"));
    }

    #[test]
    fn notes_follow_the_output() {
        assert_eq!(
            with_notes("added".to_string(), &["a".to_string()]),
            "added\nnote: a"
        );
        assert_eq!(with_notes("added".to_string(), &[]), "added");
    }

    #[test]
    fn cards_align_on_longest_title() {
        let text = render_cards(&[
            OverviewCard {
                title: "Aantal".to_string(),
                value: "2".to_string(),
            },
            OverviewCard {
                title: "Totaal".to_string(),
                value: "€ 5,00".to_string(),
            },
        ]);
        assert_eq!(text, "Aantal  2\nTotaal  € 5,00");
    }
}
