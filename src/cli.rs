// src/cli.rs
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::config::consts::PRICE_CAP;
use crate::config::options::{AppOptions, ExportFormat, ExportOptions};
use crate::core::format::currency;
use crate::csv::write_table;
use crate::error::LoadFailure;
use crate::filter::{self, DateRange, FilterCriteria, PriceRange};
use crate::store::{self, normalize_date};
use crate::{file, table_model};

const HELP: &str = "\
Usage: whisky_board_cli [options]

  --db <path>          SQLite store (default: $WHISKY_BOARD_DB or p9_whisky.db)
  -k, --keyword <s>    match title or product name (any case)
  -s, --seller <s>     match seller account (any case)
  --from <YYYY/MM/DD>  first post date (needs --to)
  --to <YYYY/MM/DD>    last post date (needs --from)
  --min <n>            lowest price (inclusive)
  --max <n>            highest price (inclusive)
  --format <csv|tsv>   output format (default csv)
  --no-headers         omit the header line
  -o, --out <file>     write to file instead of stdout
  -h, --help           show this help";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Args(String),
    #[error(transparent)]
    Load(#[from] LoadFailure),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn arg_err(msg: impl Into<String>) -> CliError {
    CliError::Args(msg.into())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub db: Option<String>,
    pub keyword: Option<String>,
    pub seller: Option<String>,
    pub date_range: Option<DateRange>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub format: Option<ExportFormat>,
    pub no_headers: bool,
    pub out: Option<PathBuf>,
    pub help: bool,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params, CliError> {
    let mut p = Params::default();
    let mut from = None;
    let mut to = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| arg_err(format!("Missing value for {name}")));
        match a.as_str() {
            "--db" => p.db = Some(value("--db")?),
            "-k" | "--keyword" => p.keyword = Some(value("--keyword")?),
            "-s" | "--seller" => p.seller = Some(value("--seller")?),
            "--from" => from = Some(parse_date(&value("--from")?)?),
            "--to" => to = Some(parse_date(&value("--to")?)?),
            "--min" => p.min_price = Some(parse_price(&value("--min")?)?),
            "--max" => p.max_price = Some(parse_price(&value("--max")?)?),
            "--format" => {
                let v = value("--format")?;
                p.format = Some(ExportFormat::parse(&v).ok_or_else(|| arg_err(format!("Unknown format: {v}")))?);
            }
            "--no-headers" => p.no_headers = true,
            "-o" | "--out" => p.out = Some(PathBuf::from(value("--out")?)),
            "-h" | "--help" => p.help = true,
            _ => return Err(arg_err(format!("Unknown arg: {a}"))),
        }
    }

    match (from, to) {
        (None, None) => {}
        (Some(_), Some(_)) => p.date_range = Some(DateRange { start: from, end: to }),
        _ => return Err(arg_err("--from and --to must be given together")),
    }

    Ok(p)
}

fn parse_date(s: &str) -> Result<chrono::NaiveDate, CliError> {
    normalize_date(s).ok_or_else(|| arg_err(format!("Bad date (want YYYY/MM/DD): {s}")))
}

fn parse_price(s: &str) -> Result<u64, CliError> {
    s.trim().parse().map_err(|_| arg_err(format!("Bad price: {s}")))
}

impl Params {
    /// Criteria over the loaded data. A lone `--min`/`--max` takes the other
    /// end from the dashboard default.
    pub fn criteria(&self, listings: &[store::Listing]) -> FilterCriteria {
        let price_range = match (self.min_price, self.max_price) {
            (None, None) => None,
            (min, max) => {
                let def = PriceRange::default_for(listings, PRICE_CAP);
                Some(PriceRange::new(min.unwrap_or(def.min), max.unwrap_or(def.max)))
            }
        };

        FilterCriteria {
            keyword: self.keyword.clone(),
            seller: self.seller.clone(),
            date_range: self.date_range,
            price_range,
        }
    }

    fn export_options(&self) -> ExportOptions {
        let mut export = ExportOptions::default();
        if let Some(fmt) = self.format {
            export.format = fmt;
        }
        export.include_headers = !self.no_headers;
        export
    }
}

pub fn run() -> Result<(), CliError> {
    let params = parse_args(std::env::args().skip(1))?;
    if params.help {
        println!("{HELP}");
        return Ok(());
    }

    let options = AppOptions::resolve(params.db.clone());
    let listings = store::load(&options.store.path)?;

    let criteria = params.criteria(&listings);
    logd!("CLI: criteria {:?}", criteria);
    let result = filter::apply(&listings, &criteria);

    let headers = table_model::headers();
    let rows = table_model::export_rows(&listings, &result);
    let export = params.export_options();

    match &params.out {
        Some(path) => {
            file::write_export(path, &export, &headers, &rows)?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            let h = export.include_headers.then_some(headers.as_slice());
            write_table(&mut w, h, &rows, export.format.delim())?;
            w.flush()?;
        }
    }

    eprintln!(
        "Total: {} | Matches: {} | Average: {}",
        result.total_count,
        result.filtered_count,
        currency(result.average_price)
    );
    logf!("CLI: {} of {} listings written", result.filtered_count, result.total_count);
    Ok(())
}
