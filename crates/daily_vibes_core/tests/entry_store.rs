use daily_vibes_core::db::{open_db, open_db_in_memory};
use daily_vibes_core::{
    Entry, EntryStore, LoadDiagnostic, LoadOutcome, SlotStore, SqliteSlotStore, DEFAULT_SLOT_KEY,
};
use chrono::{TimeZone, Utc};

fn entry(millis: i64, mood: &str, note: &str, user: Option<&str>) -> Entry {
    let now = Utc.timestamp_millis_opt(millis).unwrap();
    Entry::new(now, mood, note, user.map(str::to_string))
}

#[test]
fn load_of_absent_slot_is_empty_without_diagnostic() {
    let conn = open_db_in_memory().unwrap();
    let store = EntryStore::new(SqliteSlotStore::try_new(&conn).unwrap());

    let outcome = store.load();
    assert_eq!(outcome, LoadOutcome::Loaded(Vec::new()));
    assert!(outcome.diagnostic().is_none());
    assert_eq!(store.key(), DEFAULT_SLOT_KEY);
}

#[test]
fn save_then_load_returns_same_list() {
    let conn = open_db_in_memory().unwrap();
    let store = EntryStore::new(SqliteSlotStore::try_new(&conn).unwrap());
    let list = vec![
        entry(2_000, "😡", "rough day", Some("Zaw")),
        entry(1_000, "😊", "", Some("Shin")),
    ];

    store.save(&list).unwrap();
    let first = store.load().into_entries();
    assert_eq!(first, list);

    store.save(&first).unwrap();
    assert_eq!(store.load().into_entries(), first);
}

#[test]
fn load_then_save_reproduces_stored_text_exactly() {
    let conn = open_db_in_memory().unwrap();
    let slots = SqliteSlotStore::try_new(&conn).unwrap();
    let raw = concat!(
        r#"[{"id":1709647629123,"date":"2024-03-05T14:07:09.123Z","mood":"😡","note":"rough day","user":"Zaw"},"#,
        r#"{"id":1709561229000,"date":"2024-03-04T14:07:09.000Z","mood":"😌","note":""}]"#
    );
    slots.write_slot(DEFAULT_SLOT_KEY, raw).unwrap();

    let store = EntryStore::new(slots);
    let loaded = store.load().into_entries();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].user, None);
    store.save(&loaded).unwrap();

    let stored = conn
        .query_row(
            "SELECT value FROM kv_slots WHERE key = ?1;",
            [DEFAULT_SLOT_KEY],
            |row| row.get::<_, String>(0),
        )
        .unwrap();
    assert_eq!(stored, raw);
}

#[test]
fn single_record_instead_of_list_recovers_to_empty() {
    let conn = open_db_in_memory().unwrap();
    let slots = SqliteSlotStore::try_new(&conn).unwrap();
    slots
        .write_slot(
            DEFAULT_SLOT_KEY,
            r#"{"id":1,"date":"2024-03-05T14:07:09.123Z","mood":"😊","note":""}"#,
        )
        .unwrap();

    let outcome = EntryStore::new(slots).load();
    assert!(outcome.entries().is_empty());
    assert_eq!(
        outcome.diagnostic(),
        Some(&LoadDiagnostic::NotASequence { found: "object" })
    );
}

#[test]
fn plain_text_recovers_to_empty() {
    let conn = open_db_in_memory().unwrap();
    let slots = SqliteSlotStore::try_new(&conn).unwrap();
    slots.write_slot(DEFAULT_SLOT_KEY, "hello there").unwrap();

    let outcome = EntryStore::new(slots).load();
    assert!(outcome.entries().is_empty());
    assert!(matches!(
        outcome.diagnostic(),
        Some(LoadDiagnostic::Malformed { .. })
    ));
}

#[test]
fn corrupt_value_stays_until_next_save() {
    let conn = open_db_in_memory().unwrap();
    let slots = SqliteSlotStore::try_new(&conn).unwrap();
    slots.write_slot(DEFAULT_SLOT_KEY, "42").unwrap();
    let store = EntryStore::new(slots);

    assert!(store.load().diagnostic().is_some());
    assert!(store.load().diagnostic().is_some());

    store.save(&[entry(5, "🤔", "", None)]).unwrap();
    assert_eq!(store.load().entries().len(), 1);
}

#[test]
fn unreadable_slot_recovers_with_read_failure() {
    let conn = open_db_in_memory().unwrap();
    let store = EntryStore::new(SqliteSlotStore::try_new(&conn).unwrap());
    conn.execute_batch("DROP TABLE kv_slots;").unwrap();

    let outcome = store.load();
    assert!(outcome.entries().is_empty());
    assert!(matches!(
        outcome.diagnostic(),
        Some(LoadDiagnostic::ReadFailed { .. })
    ));
}

#[test]
fn slots_are_isolated_by_key() {
    let conn = open_db_in_memory().unwrap();
    let first = EntryStore::with_key(SqliteSlotStore::try_new(&conn).unwrap(), "first");
    let second = EntryStore::with_key(SqliteSlotStore::try_new(&conn).unwrap(), "second");

    first.save(&[entry(1, "😊", "", None)]).unwrap();
    assert_eq!(first.load().entries().len(), 1);
    assert!(second.load().entries().is_empty());
    assert!(second.load().diagnostic().is_none());
}

#[test]
fn file_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.sqlite3");
    let list = vec![entry(1_000, "😢", "miss you", Some("Cho"))];

    {
        let conn = open_db(&path).unwrap();
        EntryStore::new(SqliteSlotStore::try_new(&conn).unwrap())
            .save(&list)
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let loaded = EntryStore::new(SqliteSlotStore::try_new(&conn).unwrap()).load();
    assert_eq!(loaded, LoadOutcome::Loaded(list));
}

#[test]
fn null_user_loads_as_absent_and_saves_without_key() {
    let conn = open_db_in_memory().unwrap();
    let slots = SqliteSlotStore::try_new(&conn).unwrap();
    slots
        .write_slot(
            DEFAULT_SLOT_KEY,
            r#"[{"id":7,"date":"2024-03-05T14:07:09.123Z","mood":"😊","note":"","user":null}]"#,
        )
        .unwrap();
    let store = EntryStore::new(slots);

    let loaded = store.load();
    assert!(loaded.diagnostic().is_none());
    assert_eq!(loaded.entries()[0].user, None);
    store.save(loaded.entries()).unwrap();

    let stored = conn
        .query_row(
            "SELECT value FROM kv_slots WHERE key = ?1;",
            [DEFAULT_SLOT_KEY],
            |row| row.get::<_, String>(0),
        )
        .unwrap();
    assert_eq!(
        stored,
        r#"[{"id":7,"date":"2024-03-05T14:07:09.123Z","mood":"😊","note":""}]"#
    );
}
