use kasboek_core::{
    overview_cards, AppConfig, AppContext, ContextError, EntityKind, Entry, Investment,
    RecordShape, Saving,
};

#[test]
fn store_rejects_mismatched_record_type() {
    let ctx = AppContext::in_memory().unwrap();

    let err = ctx.store::<Entry>(EntityKind::Investment).err().unwrap();
    match err {
        ContextError::ShapeMismatch {
            kind,
            expected,
            requested,
        } => {
            assert_eq!(kind, EntityKind::Investment);
            assert_eq!(expected, RecordShape::Investment);
            assert_eq!(requested, RecordShape::Entry);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn every_kind_opens_with_its_record_type() {
    let ctx = AppContext::in_memory().unwrap();
    for kind in EntityKind::ALL {
        let opened = match kind.schema().shape {
            RecordShape::Entry => ctx.store::<Entry>(kind).map(|s| s.len()),
            RecordShape::Saving => ctx.store::<Saving>(kind).map(|s| s.len()),
            RecordShape::Investment => ctx.store::<Investment>(kind).map(|s| s.len()),
        };
        assert_eq!(opened.unwrap(), 0, "kind {}", kind.as_str());
    }
}

#[test]
fn stores_from_one_context_share_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        db_path: dir.path().join("kasboek.sqlite3"),
        ..AppConfig::default()
    };

    let ctx = AppContext::open(config.clone()).unwrap();
    {
        let mut subscriptions = ctx.store::<Entry>(EntityKind::Subscription).unwrap();
        subscriptions
            .append(Entry::new("Streaming", 12.99, "2024-01-05", "Entertainment"))
            .unwrap();
        subscriptions
            .append(Entry::new("Mobiel", 20.0, "2024-01-07", "Internet- TV & Bellen"))
            .unwrap();
    }
    ctx.close().unwrap();

    let ctx = AppContext::open(config).unwrap();
    let subscriptions = ctx.store::<Entry>(EntityKind::Subscription).unwrap();
    let cards = overview_cards(EntityKind::Subscription, subscriptions.list());

    assert_eq!(cards[0].value, "2");
    assert_eq!(cards[1].value, "€\u{a0}32,99");
    assert_eq!(cards[2].title, "Totaal per jaar (actief)");
    assert_eq!(cards[2].value, "€\u{a0}395,88");
}

#[test]
fn open_rejects_relative_log_dir() {
    let config = AppConfig {
        log_dir: Some("logs".into()),
        ..AppConfig::default()
    };

    match AppContext::open(config).err().unwrap() {
        ContextError::Config(_) => {}
        other => panic!("unexpected error: {other}"),
    }
}
