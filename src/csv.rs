// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write an optional header line followed by every row.
pub fn write_table<W: Write>(
    mut w: W,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    sep: char,
) -> io::Result<()> {
    if let Some(h) = headers {
        write_row(&mut w, h, sep)?;
    }
    for r in rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

/// Whole table as one string (clipboard).
pub fn to_export_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec can't fail.
    let _ = write_table(&mut buf, headers, rows, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
