//! Dataset loading and cleaning
//!
//! The source CSV names its columns "State Name" and "Investment Dollars" and
//! stores amounts as thousands-separated text. Loading renames both columns,
//! parses the amounts to integers and replaces withheld city names with
//! "Unknown". The canonical column names are accepted too, so a cleaned file
//! loads back unchanged.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::InvestmentRecord;

/// City placeholder used by the source for redacted names
pub const WITHHELD_CITY: &str = "City Name Withheld";

/// Canonical marker for a withheld city
pub const UNKNOWN_CITY: &str = "Unknown";

/// Immutable base table: every cleaned record plus the program areas seen
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<InvestmentRecord>,
    program_areas: Vec<String>,
}

impl Dataset {
    /// Build a dataset from already-cleaned records
    pub fn from_records(records: Vec<InvestmentRecord>) -> Self {
        let mut program_areas: Vec<String> = Vec::new();
        for record in &records {
            if !program_areas.contains(&record.program_area) {
                program_areas.push(record.program_area.clone());
            }
        }
        Self {
            records,
            program_areas,
        }
    }

    /// Load and clean the dataset at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            program_areas = dataset.program_areas.len(),
            "Loaded investment dataset"
        );
        Ok(dataset)
    }

    /// Parse and clean CSV data from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        parse_csv(reader).map(Self::from_records)
    }

    pub fn records(&self) -> &[InvestmentRecord] {
        &self.records
    }

    /// Distinct program areas in first-seen order
    pub fn program_areas(&self) -> &[String] {
        &self.program_areas
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Column positions resolved from the header row
struct Columns {
    program_area: usize,
    investment_type: usize,
    state: usize,
    city: usize,
    investment: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            program_area: find_column(headers, &["Program Area"])?,
            investment_type: find_column(headers, &["Investment Type"])?,
            state: find_column(headers, &["State Name", "State"])?,
            city: find_column(headers, &["City"])?,
            investment: find_column(headers, &["Investment Dollars", "Investment"])?,
        })
    }
}

/// Find the first header matching any of `names` (source name first)
fn find_column(headers: &StringRecord, names: &[&str]) -> Result<usize> {
    names
        .iter()
        .find_map(|name| headers.iter().position(|h| h == *name))
        .ok_or_else(|| Error::MissingColumn(names[0].to_string()))
}

/// Parse and clean investment records from CSV
///
/// Fails on the first malformed row; there is no partial load. The running
/// total is checked so that every later sum over a subset fits in `u64`.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<InvestmentRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::resolve(&headers)?;
    let mut records = Vec::new();
    let mut withheld = 0usize;
    let mut total = 0u64;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = |idx: usize| record.get(idx).unwrap_or_default();

        let amount_str = field(columns.investment);
        let investment = parse_investment(amount_str).ok_or_else(|| Error::InvalidInvestment {
            line,
            value: amount_str.to_string(),
        })?;
        total = total
            .checked_add(investment)
            .ok_or(Error::InvestmentOverflow { line })?;

        let city = clean_city(field(columns.city));
        if city == UNKNOWN_CITY {
            withheld += 1;
        }

        records.push(InvestmentRecord {
            program_area: field(columns.program_area).to_string(),
            investment_type: field(columns.investment_type).to_string(),
            state: field(columns.state).to_string(),
            city,
            investment,
        });
    }

    debug!(
        "Parsed {} investment records ({} with withheld city)",
        records.len(),
        withheld
    );
    Ok(records)
}

/// Parse a thousands-separated dollar amount ("1,234,567") to an integer
///
/// Only digits and commas are accepted; anything else (signs, decimals,
/// currency symbols, empty text) is malformed.
pub fn parse_investment(s: &str) -> Option<u64> {
    let digits: String = s.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Replace the withheld-city placeholder, leaving any other name untouched
pub fn clean_city(city: &str) -> String {
    if city == WITHHELD_CITY {
        UNKNOWN_CITY.to_string()
    } else {
        city.to_string()
    }
}

/// Write cleaned records as CSV with canonical column names
pub fn write_csv<W: Write>(writer: W, records: &[InvestmentRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
