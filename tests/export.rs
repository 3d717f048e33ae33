// tests/export.rs
//
// Copy/CLI export of the filtered table, without UI.
//
use std::fs;
use std::path::PathBuf;

use whisky_board::config::options::{ExportFormat, ExportOptions};
use whisky_board::csv::to_export_string;
use whisky_board::file::write_export;
use whisky_board::filter::{self, FilterCriteria};
use whisky_board::store::Listing;
use whisky_board::table_model;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("whisky_board_export_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    p
}

fn sample() -> Vec<Listing> {
    vec![
        Listing::new("2024/06/01", "Hibiki 17, boxed", "bob", "Hibiki 17", 12000, "https://p9.example/2"),
        Listing::new("2024/01/01", "Macallan \"12\"", "alice", "Macallan 12", 3000, "https://p9.example/1"),
    ]
}

#[test]
fn export_rows_follow_filter_and_column_order() {
    let listings = sample();
    let r = filter::apply(&listings, &FilterCriteria::default().keyword("macallan"));
    let rows = table_model::export_rows(&listings, &r);

    assert_eq!(table_model::headers(), vec!["Posted", "Title", "Product", "Seller", "Price", "Link"]);
    assert_eq!(rows, vec![vec![
        "2024/01/01".to_string(),
        "Macallan \"12\"".into(),
        "Macallan 12".into(),
        "alice".into(),
        "3000".into(),
        "https://p9.example/1".into(),
    ]]);
}

#[test]
fn csv_quotes_separators_and_quotes() {
    let listings = sample();
    let r = filter::apply(&listings, &FilterCriteria::default());
    let headers = table_model::headers();
    let rows = table_model::export_rows(&listings, &r);

    let s = to_export_string(Some(headers.as_slice()), &rows, ',');
    let mut lines = s.lines();
    assert_eq!(lines.next(), Some("Posted,Title,Product,Seller,Price,Link"));
    assert_eq!(lines.next(), Some("2024/06/01,\"Hibiki 17, boxed\",Hibiki 17,bob,12000,https://p9.example/2"));
    assert_eq!(lines.next(), Some("2024/01/01,\"Macallan \"\"12\"\"\",Macallan 12,alice,3000,https://p9.example/1"));
    assert_eq!(lines.next(), None);

    // TSV leaves the comma alone
    let t = to_export_string(None, &rows, '\t');
    assert!(t.starts_with("2024/06/01\tHibiki 17, boxed\t"));
}

#[test]
fn write_export_creates_dirs_and_honours_headers_flag() {
    let listings = sample();
    let r = filter::apply(&listings, &FilterCriteria::default());
    let headers = table_model::headers();
    let rows = table_model::export_rows(&listings, &r);

    let dir = tmp_dir("file");
    let path = dir.join("nested").join("out.tsv");
    let export = ExportOptions { format: ExportFormat::Tsv, include_headers: false };
    write_export(&path, &export, &headers, &rows).unwrap();

    let s = fs::read_to_string(&path).unwrap();
    assert_eq!(s.lines().count(), 2);
    assert!(!s.contains("Posted"));
    assert!(s.contains("\t12000\t"));

    let _ = fs::remove_dir_all(&dir);
}
