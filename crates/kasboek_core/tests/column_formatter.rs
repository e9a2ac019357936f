use kasboek_core::{Cell, ColumnFormatter, EntityKind, Entry, Investment, Saving, TableView};
use std::cell::RefCell;
use std::rc::Rc;

fn inert<T: kasboek_core::Record>() -> ColumnFormatter<T> {
    ColumnFormatter::new(|_| {}, |_| {})
}

#[test]
fn requested_keys_plus_actions_column() {
    let columns = inert::<Entry>().columns(&["amount", "date"]);

    let headers = columns.iter().map(|c| c.header()).collect::<Vec<_>>();
    assert_eq!(headers, vec!["Bedrag", "Datum", "Acties"]);
    assert!(columns[2].is_actions());
    assert!(!columns[0].is_actions());
}

#[test]
fn unknown_keys_are_dropped() {
    let columns = inert::<Entry>().columns(&["name", "colour", "category"]);

    let headers = columns.iter().map(|c| c.header()).collect::<Vec<_>>();
    assert_eq!(headers, vec!["Naam", "Categorie", "Acties"]);
}

#[test]
fn action_cell_passes_the_exact_row_to_callbacks() {
    let edited = Rc::new(RefCell::new(Vec::<*const Entry>::new()));
    let deleted = Rc::new(RefCell::new(Vec::<*const Entry>::new()));
    let formatter = {
        let edited = Rc::clone(&edited);
        let deleted = Rc::clone(&deleted);
        ColumnFormatter::new(
            move |row: &Entry| edited.borrow_mut().push(row as *const Entry),
            move |row: &Entry| deleted.borrow_mut().push(row as *const Entry),
        )
    };
    let rows = vec![
        Entry::new("Huur", 950.0, "2024-02-01", "Anders"),
        Entry::new("Stroom", 80.0, "2024-02-03", "Anders"),
    ];
    let columns = formatter.columns(&["name"]);
    let actions = columns.last().unwrap();

    match actions.render(&rows[1]) {
        Cell::Actions(actions) => {
            assert!(std::ptr::eq(actions.row(), &rows[1]));
            actions.edit();
            actions.delete();
            actions.delete();
        }
        Cell::Text(text) => panic!("expected actions cell, got {text}"),
    }

    assert_eq!(*edited.borrow(), vec![&rows[1] as *const Entry]);
    assert_eq!(deleted.borrow().len(), 2);
    assert!(deleted.borrow().iter().all(|ptr| *ptr == &rows[1] as *const Entry));
}

#[test]
fn entry_cells_use_dutch_formatting() {
    let entry = Entry::new("Salaris", 2500.0, "2024-03-05", "Salaris");
    let columns = inert::<Entry>().columns(EntityKind::Income.schema().columns);

    let view = TableView::build(&columns, &[&entry]);
    assert_eq!(
        view.rows[0],
        vec!["Salaris", "€\u{a0}2.500,00", "5-3-2024", "Salaris", "Bewerk | Verwijder"]
    );
}

#[test]
fn invalid_date_renders_placeholder() {
    let entry = Entry::new("Oud", 1.0, "not-a-date", "Anders");
    let columns = inert::<Entry>().columns(&["date"]);

    assert_eq!(columns[0].render(&entry).to_text(), "Invalid Date");
}

#[test]
fn investment_symbol_is_uppercased_and_missing_note_is_dash() {
    let investment = Investment::new("Bitcoin", "btc-eur", 40000.0, 0.25, "2024-01-10", "Crypto");
    let columns = inert::<Investment>().columns(&["symbol", "amountInvested", "note"]);

    let view = TableView::build(&columns, &[&investment]);
    assert_eq!(view.headers, vec!["Symbol", "Bedrag", "Notitie", "Acties"]);
    assert_eq!(
        view.rows[0],
        vec!["BTC-EUR", "€\u{a0}10.000,00", "-", "Bewerk | Verwijder"]
    );
}

#[test]
fn missing_savings_goal_renders_dash() {
    let saving = Saving::new("Buffer", 300.0, None);
    let columns = inert::<Saving>().columns(EntityKind::Saving.schema().columns);

    let view = TableView::build(&columns, &[&saving]);
    assert_eq!(view.headers, vec!["Naam", "Bedrag", "Spaardoel", "Acties"]);
    assert_eq!(view.rows[0][2], "-");
}

#[test]
fn empty_table_shows_empty_state() {
    let columns = inert::<Entry>().columns(&["name"]);
    let view = TableView::build::<Entry>(&columns, &[]);

    assert!(view.is_empty());
    let text = view.to_text();
    assert!(text.starts_with("Naam | Acties"));
    assert!(text.ends_with("No data"));
}
