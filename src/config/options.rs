// src/config/options.rs
use std::env;
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub store: StoreOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Store path from an explicit argument, then `WHISKY_BOARD_DB`, then the default.
    pub fn resolve(arg: Option<String>) -> Self {
        let path = arg
            .filter(|s| !s.trim().is_empty())
            .or_else(|| env::var(DB_PATH_ENV).ok().filter(|s| !s.trim().is_empty()))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        Self {
            store: StoreOptions { path },
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub path: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_DB_PATH) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}
