// src/store/mod.rs
//
// Read-only access to the scraper's SQLite store.
// One fixed query per load; the connection lives only as long as that query.

use std::path::Path;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::error::LoadFailure;

pub mod listing;
pub mod schema;

pub use listing::{normalize_date, Listing, ListingRow};

use schema::market_prices;

/// Load every listing, most recent insertion first.
pub fn load(path: &Path) -> Result<Vec<Listing>, LoadFailure> {
    // SQLite creates missing files on open; there is no write path here.
    if !path.is_file() {
        return Err(LoadFailure::MissingStore(path.to_path_buf()));
    }

    let mut conn = SqliteConnection::establish(&path.to_string_lossy())
        .map_err(|source| LoadFailure::Connect { path: path.to_path_buf(), source })?;

    let rows = market_prices::table
        .select(ListingRow::as_select())
        .order(market_prices::id.desc())
        .load::<ListingRow>(&mut conn)?;

    drop(conn);

    let listings = rows
        .into_iter()
        .map(Listing::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let undated = listings.iter().filter(|l| l.post_date_normalized.is_none()).count();
    if undated > 0 {
        logd!("Store: {} of {} rows have an unparseable post_date", undated, listings.len());
    }
    logf!("Store: Loaded {} listings from {}", listings.len(), path.display());

    Ok(listings)
}
