// src/table_model.rs
//! Column layout shared by the on-screen table and the Copy/CLI exports.
//!
//! The GUI renders cells itself (currency formatting, hyperlinks); exports
//! want plain values, so the export row keeps the raw integer price and the
//! raw URL.

use crate::filter::FilteredResult;
use crate::store::Listing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    PostDate,
    Title,
    ProductName,
    Author,
    Price,
    Link,
}

/// Display order.
pub const COLUMNS: [Column; 6] = [
    Column::PostDate,
    Column::Title,
    Column::ProductName,
    Column::Author,
    Column::Price,
    Column::Link,
];

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::PostDate => "Posted",
            Column::Title => "Title",
            Column::ProductName => "Product",
            Column::Author => "Seller",
            Column::Price => "Price",
            Column::Link => "Link",
        }
    }

    /// Initial widths in px-ish
    pub fn preferred_width(&self) -> f32 {
        match self {
            Column::PostDate => 90.0,
            Column::Title => 360.0,
            Column::ProductName => 220.0,
            Column::Author => 140.0,
            Column::Price => 90.0,
            Column::Link => 90.0,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Price)
    }

    /// Plain cell value for export.
    pub fn export_cell(&self, l: &Listing) -> String {
        match self {
            Column::PostDate => l.post_date.clone(),
            Column::Title => l.title.clone(),
            Column::ProductName => l.product_name.clone(),
            Column::Author => l.author.clone(),
            Column::Price => l.price.to_string(),
            Column::Link => l.link.clone(),
        }
    }
}

pub fn headers() -> Vec<String> {
    COLUMNS.iter().map(|c| s!(c.header())).collect()
}

/// Owned export rows for the kept listings, in display order.
pub fn export_rows(listings: &[Listing], result: &FilteredResult) -> Vec<Vec<String>> {
    result
        .rows(listings)
        .map(|l| COLUMNS.iter().map(|c| c.export_cell(l)).collect())
        .collect()
}
