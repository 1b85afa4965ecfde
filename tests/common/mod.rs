#![allow(dead_code)]

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use twr::domain::config_validation::DATE_FORMAT;
use twr::domain::error::PortfolioError;
pub use twr::domain::transaction::Transaction;
pub use twr::domain::valuation::ValuationPoint;
use twr::ports::data_port::DataPort;

pub struct MockDataPort {
    pub valuations: Vec<ValuationPoint>,
    pub transactions: Vec<Transaction>,
    pub error: Option<String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            valuations: Vec::new(),
            transactions: Vec::new(),
            error: None,
        }
    }

    pub fn with_valuations(mut self, valuations: Vec<ValuationPoint>) -> Self {
        self.valuations = valuations;
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }

    fn check(&self) -> Result<(), PortfolioError> {
        match &self.error {
            Some(reason) => Err(PortfolioError::DataLoad {
                path: "mock".to_string(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl DataPort for MockDataPort {
    fn fetch_valuations(&self) -> Result<Vec<ValuationPoint>, PortfolioError> {
        self.check()?;
        Ok(self.valuations.clone())
    }

    fn fetch_transactions(&self) -> Result<Vec<Transaction>, PortfolioError> {
        self.check()?;
        Ok(self.transactions.clone())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn valuation(value: f64, day: &str) -> ValuationPoint {
    ValuationPoint::new(value, NaiveDate::parse_from_str(day, DATE_FORMAT).unwrap())
}

pub fn transaction(value: f64, day: &str) -> Transaction {
    Transaction::new(value, NaiveDate::parse_from_str(day, DATE_FORMAT).unwrap())
}

pub fn sample_valuations() -> Vec<ValuationPoint> {
    vec![
        valuation(1020.0, "2024-01-01"),
        valuation(1105.0, "2024-01-02"),
        valuation(1201.0, "2024-01-03"),
    ]
}

pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        transaction(120.0, "2024-01-01"),
        transaction(205.0, "2024-01-02"),
        transaction(-100.0, "2024-01-03"),
        transaction(0.0, "2024-01-03"),
    ]
}

pub const SAMPLE_OVERALL_RETURN: f64 = 0.07941176470588235;
pub const SAMPLE_PERIOD_RETURN: f64 = 0.27966462603140796;

pub const SAMPLE_VALUATIONS_CSV: &str = "date,value\n\
    2024-01-01,1020\n\
    2024-01-02,1105\n\
    2024-01-03,1201\n";

pub const SAMPLE_TRANSACTIONS_CSV: &str = "date,value\n\
    2024-01-01,120\n\
    2024-01-02,205\n\
    2024-01-03,-100\n\
    2024-01-03,0\n";

/// Writes the sample CSVs and a config referencing them by relative path.
/// Returns the config path.
pub fn write_sample_workspace(dir: &Path, extra_ini: &str) -> PathBuf {
    fs::write(dir.join("valuations.csv"), SAMPLE_VALUATIONS_CSV).unwrap();
    fs::write(dir.join("transactions.csv"), SAMPLE_TRANSACTIONS_CSV).unwrap();
    let config = dir.join("twr.ini");
    fs::write(
        &config,
        format!(
            "[data]\nvaluations = valuations.csv\ntransactions = transactions.csv\n\n{}",
            extra_ini
        ),
    )
    .unwrap();
    config
}
