// src/config/consts.rs

// Store
pub const DEFAULT_DB_PATH: &str = "p9_whisky.db";
pub const DB_PATH_ENV: &str = "WHISKY_BOARD_DB";

// Raw `post_date` format written by the scraper
pub const DATE_FORMAT: &str = "%Y/%m/%d";

// Price slider
pub const PRICE_CAP: u64 = 100_000;
pub const PRICE_STEP: f64 = 100.0;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Window
pub const APP_TITLE: &str = "P9 Whisky Market Board";
pub const WINDOW_W: f32 = 1280.0;
pub const WINDOW_H: f32 = 800.0;
pub const DATA_SOURCE_CAPTION: &str = "Data source: P9 whisky forum | collected by an automated scraper";
