use journal::db::DbPool;
use journal::db::queries::{
    append_entry, count_entries, distinct_names, hitlist, list_entries, total_duration,
};
use journal::models::{Entry, Hit};

mod common;
use common::setup_test_db;

/// Fresh database file for one test.
fn open_test_pool(name: &str) -> DbPool {
    DbPool::new(&setup_test_db(name)).expect("open test db")
}

fn pool_with_example_entries(name: &str) -> DbPool {
    let mut pool = open_test_pool(name);
    append_entry(&mut pool, "ralph", 10, "asked about reports").expect("append");
    append_entry(&mut pool, "sara", 5, "sql help").expect("append");
    append_entry(&mut pool, "ralph", 17, "again").expect("append");
    pool
}

#[test]
fn test_empty_store() {
    let mut pool = open_test_pool("storage_empty");

    assert!(list_entries(&mut pool).expect("list").is_empty());
    assert!(hitlist(&mut pool).expect("hitlist").is_empty());
    assert_eq!(total_duration(&mut pool).expect("total"), 0);
    assert_eq!(count_entries(&mut pool).expect("count"), 0);
}

#[test]
fn test_ids_strictly_increase() {
    let mut pool = open_test_pool("storage_ids");

    let mut last = 0;
    for i in 1..=5 {
        let id = append_entry(&mut pool, "ralph", i, "again").expect("append");
        assert!(id > last, "id {} not greater than {}", id, last);
        last = id;
    }
}

#[test]
fn test_list_returns_entries_in_insertion_order() {
    let mut pool = pool_with_example_entries("storage_order");

    let entries = list_entries(&mut pool).expect("list");
    let summary: Vec<(&str, i64, &str)> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.duration, e.reason.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("ralph", 10, "asked about reports"),
            ("sara", 5, "sql help"),
            ("ralph", 17, "again"),
        ]
    );
    assert!(entries.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn test_total_and_hitlist() {
    let mut pool = pool_with_example_entries("storage_totals");

    assert_eq!(total_duration(&mut pool).expect("total"), 32);
    assert_eq!(
        hitlist(&mut pool).expect("hitlist"),
        vec![Hit::new("ralph", 27), Hit::new("sara", 5)]
    );
    assert_eq!(distinct_names(&mut pool).expect("names"), 2);
}

#[test]
fn test_hitlist_matches_entries() {
    let mut pool = pool_with_example_entries("storage_hitlist");
    append_entry(&mut pool, "lynn", 13, "reported a bug").expect("append");
    append_entry(&mut pool, "sara", 30, "schema review").expect("append");

    let entries: Vec<Entry> = list_entries(&mut pool).expect("list");
    let hits = hitlist(&mut pool).expect("hitlist");

    for hit in &hits {
        let sum: i64 = entries
            .iter()
            .filter(|e| e.name == hit.name)
            .map(|e| e.duration)
            .sum();
        assert_eq!(sum, hit.duration, "wrong sum for {}", hit.name);
    }
    assert_eq!(hits.len(), 3);
    assert!(hits.windows(2).all(|w| w[0].duration >= w[1].duration));
    assert_eq!(hits[0], Hit::new("sara", 35));
}

#[test]
fn test_storage_rejects_non_positive_duration() {
    let mut pool = open_test_pool("storage_reject_non_positive");

    assert!(append_entry(&mut pool, "ralph", 0, "nothing").is_err());
    assert!(append_entry(&mut pool, "ralph", -3, "nothing").is_err());
    assert_eq!(count_entries(&mut pool).expect("count"), 0);
}

#[test]
fn test_entries_survive_reopening() {
    let db_path = setup_test_db("storage_reopen");

    {
        let mut pool = DbPool::new(&db_path).expect("open db");
        append_entry(&mut pool, "ralph", 10, "asked about reports").expect("append");
    }

    let mut pool = DbPool::new(&db_path).expect("reopen db");
    let tables: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='journal'",
            [],
            |row| row.get(0),
        )
        .expect("table check");
    assert_eq!(tables, 1);

    let id = append_entry(&mut pool, "sara", 5, "sql help").expect("append");
    let entries = list_entries(&mut pool).expect("list");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].id, id);
    assert!(entries[0].id < id);
}

#[test]
fn test_open_creates_missing_directories() {
    let mut dir = std::env::temp_dir();
    dir.push("storage_nested_journal");
    std::fs::remove_dir_all(&dir).ok();

    let db_path = dir.join("a").join("b").join("journal.sqlite");
    let mut pool = DbPool::new(&db_path.to_string_lossy()).expect("open nested db");
    append_entry(&mut pool, "ralph", 10, "asked about reports").expect("append");

    assert!(db_path.exists());
    assert_eq!(total_duration(&mut pool).expect("total"), 10);
}
