// src/filter.rs
//
// Criteria → filtered view + summary numbers over the loaded listings.
//
// Like the table view, the result is a list of indexes into the canonical
// rows rather than cloned data, so the GUI can keep it across frames while
// the listings themselves stay untouched.

use chrono::NaiveDate;

use crate::store::Listing;

/// Inclusive date window. Only constrains anything when both ends are set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start: Some(start), end: Some(end) }
    }

    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }
}

/// Inclusive price window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self { Self { min, max } }

    /// `[0, min(max_price, cap)]`; `[0, 0]` for no data.
    pub fn default_for(listings: &[Listing], cap: u64) -> Self {
        Self { min: 0, max: max_price(listings).min(cap) }
    }

    #[inline]
    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// User-supplied constraints. `None` (or an empty string) means no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Substring of `title` or `product_name`, any case.
    pub keyword: Option<String>,
    /// Substring of `author`, any case.
    pub seller: Option<String>,
    pub date_range: Option<DateRange>,
    pub price_range: Option<PriceRange>,
}

impl FilterCriteria {
    pub fn keyword(mut self, kw: impl Into<String>) -> Self {
        self.keyword = Some(kw.into());
        self
    }

    pub fn seller(mut self, seller: impl Into<String>) -> Self {
        self.seller = Some(seller.into());
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredResult {
    /// Positions of kept rows in the loaded listings, in load order
    pub row_ix: Vec<usize>,
    pub total_count: usize,
    pub filtered_count: usize,
    /// Rounded mean price of the kept rows; 0 when nothing is kept
    pub average_price: u64,
}

impl FilteredResult {
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow the kept rows out of the listings this result was built from.
    pub fn rows<'a>(&'a self, listings: &'a [Listing]) -> impl Iterator<Item = &'a Listing> + 'a {
        self.row_ix.iter().filter_map(move |&ix| listings.get(ix))
    }
}

/// Case-folded needle; empty needles are dropped up front.
fn needle(s: &Option<String>) -> Option<String> {
    s.as_deref().filter(|s| !s.is_empty()).map(str::to_lowercase)
}

#[inline]
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Apply every active criterion (AND across criteria, OR across the keyword's two fields).
pub fn apply(listings: &[Listing], criteria: &FilterCriteria) -> FilteredResult {
    let keyword = needle(&criteria.keyword);
    let seller = needle(&criteria.seller);
    let dates = criteria.date_range.and_then(|r| r.bounds());
    let prices = criteria.price_range;

    let row_ix: Vec<usize> = listings
        .iter()
        .enumerate()
        .filter(|(_, l)| {
            if let Some(kw) = keyword.as_deref() {
                if !(contains_folded(&l.title, kw) || contains_folded(&l.product_name, kw)) {
                    return false;
                }
            }
            if let Some(who) = seller.as_deref() {
                if !contains_folded(&l.author, who) {
                    return false;
                }
            }
            if let Some((start, end)) = dates {
                match l.post_date_normalized {
                    Some(d) if start <= d && d <= end => {}
                    _ => return false,
                }
            }
            if let Some(range) = prices {
                if !range.contains(l.price) {
                    return false;
                }
            }
            true
        })
        .map(|(ix, _)| ix)
        .collect();

    let average_price = rounded_mean(row_ix.iter().map(|&ix| listings[ix].price));

    FilteredResult {
        total_count: listings.len(),
        filtered_count: row_ix.len(),
        average_price,
        row_ix,
    }
}

/// Mean rounded half-up; 0 for an empty input.
fn rounded_mean(prices: impl Iterator<Item = u64>) -> u64 {
    let (sum, n) = prices.fold((0u128, 0u128), |(s, n), p| (s + p as u128, n + 1));
    if n == 0 {
        return 0;
    }
    ((sum + n / 2) / n) as u64
}

/// Earliest and latest normalized dates, if any row has one.
pub fn date_bounds(listings: &[Listing]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = listings.iter().filter_map(|l| l.post_date_normalized);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}

pub fn max_price(listings: &[Listing]) -> u64 {
    listings.iter().map(|l| l.price).max().unwrap_or(0)
}
