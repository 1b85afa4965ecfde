//! CSV file data adapter.
//!
//! Both files carry a header row followed by `date,value` records, dates as
//! `YYYY-MM-DD`. Rows are returned in file order.

use crate::domain::config_validation::DATE_FORMAT;
use crate::domain::error::PortfolioError;
use crate::domain::transaction::Transaction;
use crate::domain::valuation::ValuationPoint;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

const EXPECTED_HEADER: [&str; 2] = ["date", "value"];

pub struct CsvAdapter {
    valuations_path: PathBuf,
    transactions_path: Option<PathBuf>,
}

impl CsvAdapter {
    pub fn new(valuations_path: PathBuf, transactions_path: Option<PathBuf>) -> Self {
        Self {
            valuations_path,
            transactions_path,
        }
    }
}

fn load_error(path: &Path, reason: impl Into<String>) -> PortfolioError {
    PortfolioError::DataLoad {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

fn read_dated_values(path: &Path) -> Result<Vec<(NaiveDate, f64)>, PortfolioError> {
    let content =
        fs::read_to_string(path).map_err(|e| load_error(path, format!("read failed: {}", e)))?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let header = rdr
        .headers()
        .map_err(|e| load_error(path, format!("CSV header error: {}", e)))?;
    let matches = header.len() == EXPECTED_HEADER.len()
        && header
            .iter()
            .zip(EXPECTED_HEADER)
            .all(|(found, expected)| found.eq_ignore_ascii_case(expected));
    if !matches {
        let found: Vec<&str> = header.iter().collect();
        return Err(load_error(
            path,
            format!(
                "unexpected header '{}', expected '{}'",
                found.join(","),
                EXPECTED_HEADER.join(",")
            ),
        ));
    }

    let mut rows = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        // header is line 1
        let line = index + 2;
        let record =
            result.map_err(|e| load_error(path, format!("CSV parse error: {}", e)))?;

        let date_str = record
            .get(0)
            .ok_or_else(|| load_error(path, format!("line {}: missing date column", line)))?;
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|e| {
            load_error(path, format!("line {}: invalid date format: {}", line, e))
        })?;

        let value: f64 = record
            .get(1)
            .ok_or_else(|| load_error(path, format!("line {}: missing value column", line)))?
            .parse()
            .map_err(|e| load_error(path, format!("line {}: invalid value: {}", line, e)))?;

        rows.push((date, value));
    }

    Ok(rows)
}

impl DataPort for CsvAdapter {
    fn fetch_valuations(&self) -> Result<Vec<ValuationPoint>, PortfolioError> {
        let rows = read_dated_values(&self.valuations_path)?;
        Ok(rows
            .into_iter()
            .map(|(day, value)| ValuationPoint::new(value, day))
            .collect())
    }

    fn fetch_transactions(&self) -> Result<Vec<Transaction>, PortfolioError> {
        let Some(path) = &self.transactions_path else {
            return Ok(Vec::new());
        };
        let rows = read_dated_values(path)?;
        Ok(rows
            .into_iter()
            .map(|(day, value)| Transaction::new(value, day))
            .collect())
    }
}
