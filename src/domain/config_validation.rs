//! Configuration validation.
//!
//! Validates config fields before any data is loaded or any return computed.

use crate::domain::error::PortfolioError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), PortfolioError> {
    match config.get_string("data", "valuations") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(PortfolioError::ConfigMissing {
            section: "data".to_string(),
            key: "valuations".to_string(),
        }),
    }
}

/// Checks `[period] start_date` and `end_date` and returns them parsed.
pub fn validate_period_config(
    config: &dyn ConfigPort,
) -> Result<(NaiveDate, NaiveDate), PortfolioError> {
    let start_str = config.get_string("period", "start_date");
    let end_str = config.get_string("period", "end_date");

    let start_date = parse_date(start_str.as_deref(), "start_date")?;
    let end_date = parse_date(end_str.as_deref(), "end_date")?;
    validate_date_order(start_date, end_date)?;

    Ok((start_date, end_date))
}

pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), PortfolioError> {
    if end < start {
        return Err(PortfolioError::ConfigInvalid {
            section: "period".to_string(),
            key: "end_date".to_string(),
            reason: "end_date must not be before start_date".to_string(),
        });
    }
    Ok(())
}

fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate, PortfolioError> {
    match value {
        None => Err(PortfolioError::ConfigMissing {
            section: "period".to_string(),
            key: field.to_string(),
        }),
        Some(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
            PortfolioError::ConfigInvalid {
                section: "period".to_string(),
                key: field.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", field),
            }
        }),
    }
}
