use internship_core::db::open_db;
use internship_core::{
    AppContext, CoreConfig, FixedClock, FormSubmission, KeyValueStore, ListRecord,
    ProgressEntry, SqliteStore, StorageKey,
};
use chrono::{TimeZone, Utc};

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap())
}

#[test]
fn set_overwrites_and_remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("kv.sqlite3")).unwrap();
    let store = SqliteStore::new(&conn);

    assert_eq!(store.get("missing").unwrap(), None);
    store.set("k", "[1]").unwrap();
    store.set("k", "[2]").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("[2]"));

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn entries_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.sqlite3");
    let clock = clock();

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteStore::new(&conn);
        let ctx = AppContext::new(&store, &clock, CoreConfig::default());
        let form = FormSubmission::new()
            .with("date", "2026-10-19")
            .with("hours", "6")
            .with("task", "Set up CI")
            .with("status", "Completed");
        ctx.progress().submit(&form, None).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteStore::new(&conn);
    let raw = store.get(ProgressEntry::KEY.as_str()).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        stored,
        serde_json::json!([{
            "date": "2026-10-19",
            "hours": 6,
            "task": "Set up CI",
            "status": "Completed",
            "createdAt": "2026-10-19T08:00:00.000Z"
        }])
    );
    assert_eq!(ProgressEntry::KEY, StorageKey::ProgressEntries);
}
