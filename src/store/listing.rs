// src/store/listing.rs
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::config::consts::DATE_FORMAT;
use crate::error::LoadFailure;

/// One scraped marketplace post. Read-only once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub post_date: String,
    /// `None` when `post_date` doesn't parse; such rows drop out of date filtering only.
    pub post_date_normalized: Option<NaiveDate>,
    pub title: String,
    pub author: String,
    pub product_name: String,
    pub price: u64,
    pub link: String,
}

impl Listing {
    /// Build a listing from its raw columns, deriving the normalized date.
    pub fn new(
        post_date: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        product_name: impl Into<String>,
        price: u64,
        link: impl Into<String>,
    ) -> Self {
        let post_date = post_date.into();
        let post_date_normalized = normalize_date(&post_date);
        Self {
            post_date,
            post_date_normalized,
            title: title.into(),
            author: author.into(),
            product_name: product_name.into(),
            price,
            link: link.into(),
        }
    }
}

/// Parse the scraper's `YYYY/MM/DD` date. Anything else is `None`, never an error.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Row shape as stored. Text columns may be NULL; price may be anything SQLite holds.
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = super::schema::market_prices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ListingRow {
    pub post_date: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub product_name: Option<String>,
    pub price: Option<i64>,
    pub link: Option<String>,
}

impl TryFrom<ListingRow> for Listing {
    type Error = LoadFailure;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let post_date = row.post_date.unwrap_or_default();

        let price = match row.price {
            Some(p) if p >= 0 => p as u64,
            Some(p) => {
                return Err(LoadFailure::MalformedRow {
                    post_date,
                    reason: format!("negative price {p}"),
                });
            }
            None => {
                return Err(LoadFailure::MalformedRow {
                    post_date,
                    reason: s!("missing price"),
                });
            }
        };

        Ok(Listing::new(
            post_date,
            row.title.unwrap_or_default(),
            row.author.unwrap_or_default(),
            row.product_name.unwrap_or_default(),
            price,
            row.link.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_date_accepts_scraper_format() {
        assert_eq!(normalize_date("2024/03/01"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(normalize_date(" 2024/3/1 "), NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn normalize_date_rejects_other_shapes() {
        assert_eq!(normalize_date("2024-03-01"), None);
        assert_eq!(normalize_date("2024/02/30"), None);
        assert_eq!(normalize_date("yesterday"), None);
        assert_eq!(normalize_date(""), None);
    }

    #[test]
    fn null_text_columns_become_empty() {
        let row = ListingRow {
            post_date: None,
            title: Some(s!("Hibiki 17")),
            author: None,
            product_name: None,
            price: Some(12_000),
            link: None,
        };
        let l = Listing::try_from(row).unwrap();
        assert_eq!(l.title, "Hibiki 17");
        assert_eq!(l.author, "");
        assert_eq!(l.post_date_normalized, None);
        assert_eq!(l.price, 12_000);
    }

    #[test]
    fn negative_or_missing_price_is_malformed() {
        let mk = |price| ListingRow {
            post_date: Some(s!("2024/01/01")),
            title: None,
            author: None,
            product_name: None,
            price,
            link: None,
        };
        assert!(matches!(Listing::try_from(mk(Some(-1))), Err(LoadFailure::MalformedRow { .. })));
        assert!(matches!(Listing::try_from(mk(None)), Err(LoadFailure::MalformedRow { .. })));
    }
}
