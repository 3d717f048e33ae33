// src/config/state.rs
use chrono::NaiveDate;

use super::consts::PRICE_CAP;
use super::options::AppOptions;
use crate::filter::{self, DateRange, FilterCriteria, PriceRange};
use crate::store::Listing;

/// Filter inputs as the left panel edits them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuiState {
    pub keyword: String,
    pub seller: String,

    /// Min/max normalized dates in the data; `None` hides the date picker.
    pub date_bounds: Option<(NaiveDate, NaiveDate)>,
    pub date_filter_on: bool,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,

    /// False for an empty dataset; the price filter is skipped then.
    pub has_rows: bool,
    /// Slider track end: the true maximum price in the data.
    pub price_ceiling: u64,
    pub price_min: u64,
    pub price_max: u64,
}

impl Default for GuiState {
    fn default() -> Self {
        Self::for_listings(&[])
    }
}

impl GuiState {
    /// Defaults for freshly loaded data: full date span, `[0, min(max, cap)]` price.
    pub fn for_listings(listings: &[Listing]) -> Self {
        let date_bounds = filter::date_bounds(listings);
        let (date_from, date_to) = date_bounds.unwrap_or_default();
        let price = PriceRange::default_for(listings, PRICE_CAP);

        Self {
            keyword: s!(),
            seller: s!(),
            date_bounds,
            date_filter_on: date_bounds.is_some(),
            date_from,
            date_to,
            has_rows: !listings.is_empty(),
            price_ceiling: filter::max_price(listings),
            price_min: price.min,
            price_max: price.max,
        }
    }

    /// New data arrived: re-derive bounds but keep the text filters.
    pub fn rebase(&mut self, listings: &[Listing]) {
        let keyword = std::mem::take(&mut self.keyword);
        let seller = std::mem::take(&mut self.seller);
        *self = Self { keyword, seller, ..Self::for_listings(listings) };
    }

    /// Keep dates inside the data span and the price pair ordered.
    pub fn normalize(&mut self) {
        if let Some((lo, hi)) = self.date_bounds {
            self.date_from = self.date_from.clamp(lo, hi);
            self.date_to = self.date_to.clamp(lo, hi);
        }
        self.price_max = self.price_max.min(self.price_ceiling);
        if self.price_min > self.price_max {
            std::mem::swap(&mut self.price_min, &mut self.price_max);
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        let text = |s: &str| (!s.is_empty()).then(|| s!(s));

        FilterCriteria {
            keyword: text(&self.keyword),
            seller: text(&self.seller),
            date_range: (self.date_filter_on && self.date_bounds.is_some())
                .then(|| DateRange::new(self.date_from, self.date_to)),
            price_range: self
                .has_rows
                .then(|| PriceRange::new(self.price_min, self.price_max)),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
