// src/store/schema.rs
//
// Written by the scraper; this crate only reads it.

diesel::table! {
    market_prices (id) {
        id -> Integer,
        post_date -> Nullable<Text>,
        title -> Nullable<Text>,
        author -> Nullable<Text>,
        product_name -> Nullable<Text>,
        price -> Nullable<BigInt>,
        link -> Nullable<Text>,
    }
}
