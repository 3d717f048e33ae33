// tests/store_load.rs
//
// Loader against throwaway SQLite files shaped like the scraper's.
//
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable, Text};
use diesel::sqlite::SqliteConnection;

use whisky_board::error::LoadFailure;
use whisky_board::filter::{self, FilterCriteria};
use whisky_board::store;

type Seed<'a> = (&'a str, &'a str, &'a str, &'a str, Option<i64>, &'a str);

fn tmp_db(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("whisky_board_{}_{}.db", name, std::process::id()));
    let _ = fs::remove_file(&p);
    p
}

fn seed(path: &PathBuf, rows: &[Seed]) {
    let mut conn = SqliteConnection::establish(path.to_str().unwrap()).unwrap();
    diesel::sql_query(
        "CREATE TABLE market_prices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            post_date TEXT,
            title TEXT,
            author TEXT,
            product_name TEXT,
            price INTEGER,
            link TEXT
        )",
    )
    .execute(&mut conn)
    .unwrap();

    for r in rows {
        diesel::sql_query(
            "INSERT INTO market_prices (post_date, title, author, product_name, price, link)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind::<Text, _>(r.0)
        .bind::<Text, _>(r.1)
        .bind::<Text, _>(r.2)
        .bind::<Text, _>(r.3)
        .bind::<Nullable<BigInt>, _>(r.4)
        .bind::<Text, _>(r.5)
        .execute(&mut conn)
        .unwrap();
    }
}

#[test]
fn loads_most_recent_insert_first() {
    let db = tmp_db("order");
    seed(&db, &[
        ("2024/01/01", "Macallan 12 for sale", "alice", "Macallan 12", Some(3000), "https://p9.example/1"),
        ("2024/06/01", "Hibiki 17", "bob", "Hibiki 17", Some(12000), "https://p9.example/2"),
    ]);

    let listings = store::load(&db).unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].title, "Hibiki 17");
    assert_eq!(listings[1].product_name, "Macallan 12");
    assert_eq!(listings[0].post_date_normalized, NaiveDate::from_ymd_opt(2024, 6, 1));
    assert_eq!(listings[1].price, 3000);
    assert_eq!(listings[1].link, "https://p9.example/1");

    let _ = fs::remove_file(&db);
}

#[test]
fn unparseable_date_is_kept_without_normalized_value() {
    let db = tmp_db("baddate");
    seed(&db, &[
        ("last tuesday", "Yamazaki 12", "carol", "Yamazaki 12", Some(5000), ""),
        ("2024/02/02", "Hakushu", "dave", "Hakushu", Some(4000), ""),
    ]);

    let listings = store::load(&db).unwrap();
    assert_eq!(listings.len(), 2);
    let undated = listings.iter().find(|l| l.title == "Yamazaki 12").unwrap();
    assert_eq!(undated.post_date, "last tuesday");
    assert_eq!(undated.post_date_normalized, None);

    let _ = fs::remove_file(&db);
}

#[test]
fn empty_table_loads_as_empty_summary() {
    let db = tmp_db("empty");
    seed(&db, &[]);

    let listings = store::load(&db).unwrap();
    assert!(listings.is_empty());

    let r = filter::apply(&listings, &FilterCriteria::default().keyword("anything"));
    assert_eq!((r.total_count, r.filtered_count, r.average_price), (0, 0, 0));

    let _ = fs::remove_file(&db);
}

#[test]
fn missing_store_fails_without_creating_it() {
    let db = tmp_db("missing");

    let err = store::load(&db).unwrap_err();
    assert!(matches!(err, LoadFailure::MissingStore(_)));
    assert!(err.to_string().contains("whisky_board_missing"));
    assert!(!db.exists());
}

#[test]
fn missing_table_is_a_query_failure() {
    let db = tmp_db("notable");
    {
        let mut conn = SqliteConnection::establish(db.to_str().unwrap()).unwrap();
        diesel::sql_query("CREATE TABLE something_else (id INTEGER)")
            .execute(&mut conn)
            .unwrap();
    }

    let err = store::load(&db).unwrap_err();
    assert!(matches!(err, LoadFailure::Query(_)));
    assert!(err.to_string().contains("market_prices"));

    let _ = fs::remove_file(&db);
}

#[test]
fn negative_price_is_malformed() {
    let db = tmp_db("negprice");
    seed(&db, &[("2024/01/01", "Broken", "eve", "Broken", Some(-10), "")]);

    let err = store::load(&db).unwrap_err();
    assert!(matches!(err, LoadFailure::MalformedRow { .. }));

    let _ = fs::remove_file(&db);
}
