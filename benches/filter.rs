// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use whisky_board::config::consts::PRICE_CAP;
use whisky_board::filter::{self, DateRange, FilterCriteria, PriceRange};
use whisky_board::store::{normalize_date, Listing};

const NAMES: [&str; 6] = ["Macallan 12", "Hibiki 17", "Yamazaki 18", "Lagavulin 16", "Ardbeg Uigeadail", "Kavalan Solist"];

fn synthetic(n: usize) -> Vec<Listing> {
    (0..n)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let date = format!("2024/{:02}/{:02}", 1 + i % 12, 1 + i % 28);
            Listing::new(date, format!("For sale: {name} #{i}"), format!("seller{}", i % 97), name, (i as u64 * 37) % 150_000, "")
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let listings = synthetic(20_000);
    let dates = DateRange { start: normalize_date("2024/03/01"), end: normalize_date("2024/09/30") };

    c.bench_function("filter_none", |b| {
        let crit = FilterCriteria::default();
        b.iter(|| black_box(filter::apply(black_box(&listings), &crit).filtered_count))
    });

    c.bench_function("filter_dashboard_defaults", |b| {
        let crit = FilterCriteria::default()
            .date_range(DateRange { start: filter::date_bounds(&listings).map(|d| d.0), end: filter::date_bounds(&listings).map(|d| d.1) })
            .price_range(PriceRange::default_for(&listings, PRICE_CAP));
        b.iter(|| black_box(filter::apply(black_box(&listings), &crit).filtered_count))
    });

    c.bench_function("filter_all_criteria", |b| {
        let crit = FilterCriteria::default()
            .keyword("macallan")
            .seller("seller1")
            .date_range(dates)
            .price_range(PriceRange::new(1000, 50_000));
        b.iter(|| black_box(filter::apply(black_box(&listings), &crit).filtered_count))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
