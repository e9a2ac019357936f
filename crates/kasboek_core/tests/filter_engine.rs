use kasboek_core::{EntityKind, Entry, FilterEngine, FilterOption, Investment, Record};
use std::collections::BTreeSet;

fn expenses() -> Vec<Entry> {
    vec![
        Entry::new("Boodschappen", 45.2, "2024-03-01", "Eten"),
        Entry::new("Treinkaartje", 12.0, "2024-03-02", "Transport"),
        Entry::new("Bakker", 6.5, "2024-03-03", "Eten"),
    ]
}

fn expense_engine() -> FilterEngine<Entry> {
    FilterEngine::for_categories(EntityKind::Expense.schema().filter_options()).unwrap()
}

fn names(records: &[&Entry]) -> Vec<String> {
    records.iter().map(|record| record.name().to_string()).collect()
}

#[test]
fn no_selection_and_blank_search_show_everything() {
    let records = expenses();
    let mut engine = expense_engine();
    engine.set_search_term("   ");

    let visible = engine.apply(&records);
    assert_eq!(visible.len(), records.len());
    for (shown, original) in visible.iter().zip(&records) {
        assert!(std::ptr::eq(*shown, original));
    }
}

#[test]
fn selecting_food_keeps_matching_rows_in_order() {
    let records = expenses();
    let mut engine = expense_engine();
    assert!(engine.toggle("food", true));

    assert_eq!(
        names(&engine.apply(&records)),
        vec!["Boodschappen", "Bakker"]
    );
}

#[test]
fn toggling_twice_restores_the_previous_view() {
    let records = expenses();
    let mut engine = expense_engine();
    let before = names(&engine.apply(&records));

    engine.toggle("transport", true);
    engine.toggle("transport", false);

    assert_eq!(names(&engine.apply(&records)), before);
    assert!(engine.active_values().is_empty());
}

#[test]
fn unknown_option_ids_are_ignored() {
    let records = expenses();
    let mut engine = expense_engine();

    assert!(!engine.toggle("groceries", true));
    assert_eq!(engine.apply(&records).len(), 3);
}

#[test]
fn search_is_case_insensitive_and_combines_with_categories() {
    let records = expenses();
    let mut engine = expense_engine();
    engine.toggle("food", true);
    engine.set_search_term("  BAK ");

    assert_eq!(names(&engine.apply(&records)), vec!["Bakker"]);

    engine.set_search_term("trein");
    assert!(engine.apply(&records).is_empty());
}

#[test]
fn search_matches_dates_and_categories() {
    let records = expenses();
    let mut engine = expense_engine();

    engine.set_search_term("2024-03-02");
    assert_eq!(names(&engine.apply(&records)), vec!["Treinkaartje"]);

    engine.set_search_term("transport");
    assert_eq!(names(&engine.apply(&records)), vec!["Treinkaartje"]);
}

#[test]
fn applying_to_filtered_output_is_idempotent() {
    let records = expenses();
    let mut engine = expense_engine();
    engine.toggle("food", true);
    engine.set_search_term("b");

    let once = engine
        .apply(&records)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    let twice = engine.apply(&once);

    assert_eq!(names(&twice), once.iter().map(|r| r.name.clone()).collect::<Vec<_>>());
}

#[test]
fn custom_predicate_replaces_category_match() {
    let records = expenses();
    let options = vec![FilterOption::new("large", "Groot", "large")];
    let mut engine = FilterEngine::new(options, |record: &Entry, active: &BTreeSet<String>| {
        active.contains("large") && record.amount >= 10.0
    })
    .unwrap();
    engine.toggle("large", true);

    assert_eq!(
        names(&engine.apply(&records)),
        vec!["Boodschappen", "Treinkaartje"]
    );
}

#[test]
fn empty_input_gives_empty_output() {
    let mut engine = expense_engine();
    engine.toggle("food", true);
    assert!(engine.apply(&[]).is_empty());
}

#[test]
fn search_without_matches_is_empty_with_no_category_selected() {
    let records = expenses();
    let mut engine = expense_engine();
    engine.set_search_term("huur");

    assert!(engine.active_values().is_empty());
    assert!(engine.apply(&records).is_empty());
}

#[test]
fn numeric_fields_are_never_searched() {
    let records = expenses();
    let mut engine = expense_engine();

    engine.set_search_term("45");
    assert!(engine.apply(&records).is_empty());

    engine.set_search_term("6.5");
    assert!(engine.apply(&records).is_empty());
}

#[test]
fn investment_search_covers_symbol_and_note() {
    let mut with_note = Investment::new("World", "vwrl", 100.0, 2.0, "2024-01-02", "ETF");
    with_note.note = Some("Maandelijkse inleg".to_string());
    let records = vec![
        Investment::new("Bitcoin", "btc-eur", 100.0, 0.5, "2024-01-01", "Crypto"),
        with_note,
    ];
    let mut engine = FilterEngine::<Investment>::for_categories(
        EntityKind::Investment.schema().filter_options(),
    )
    .unwrap();

    engine.set_search_term("BTC");
    let visible = engine.apply(&records);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].symbol, "btc-eur");

    engine.set_search_term("inleg");
    let visible = engine.apply(&records);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "World");

    engine.set_search_term("200");
    assert!(engine.apply(&records).is_empty());
}
