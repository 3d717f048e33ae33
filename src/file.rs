// src/file.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::config::options::ExportOptions;
use crate::csv::write_table;

/// Write an export file at `path`, creating parent directories as needed.
pub fn write_export(
    path: &Path,
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut w = BufWriter::new(File::create(path)?);
    let headers = export.include_headers.then_some(headers);
    write_table(&mut w, headers, rows, export.format.delim())?;
    w.flush()
}
