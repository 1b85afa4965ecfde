//! CLI definition and dispatch.
//!
//! Results are printed to stdout as plain numbers, one per line. Progress and
//! errors go to stderr.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{
    validate_data_config, validate_date_order, validate_period_config,
};
use crate::domain::error::PortfolioError;
use crate::domain::portfolio::Portfolio;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;

#[derive(Parser, Debug)]
#[command(name = "twr", about = "Portfolio overall and time-weighted return calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Overall return from the first to the last valuation
    Overall {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Time-weighted return over a date range
    Period {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Sum of the transactions booked on one day
    Daily {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Per-day returns over a date range
    Returns {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Validate configuration and input files
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Overall { config } => run_command(&config, |_, portfolio| {
            overall_output(portfolio)
        }),
        Command::Period { config, start, end } => run_command(&config, |adapter, portfolio| {
            let (start, end) = resolve_period(start, end, adapter)?;
            eprintln!("Period: {} to {}", start, end);
            Ok(period_output(portfolio, start, end))
        }),
        Command::Daily { config, date } => run_command(&config, |_, portfolio| {
            Ok(daily_output(portfolio, date))
        }),
        Command::Returns { config, start, end } => run_command(&config, |adapter, portfolio| {
            let (start, end) = resolve_period(start, end, adapter)?;
            eprintln!("Period: {} to {}", start, end);
            Ok(returns_output(portfolio, start, end))
        }),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = PortfolioError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_data_port(adapter: &FileConfigAdapter) -> Result<CsvAdapter, PortfolioError> {
    validate_data_config(adapter)?;
    let valuations = adapter
        .get_path("data", "valuations")
        .ok_or_else(|| PortfolioError::ConfigMissing {
            section: "data".into(),
            key: "valuations".into(),
        })?;
    let transactions = adapter.get_path("data", "transactions");
    Ok(CsvAdapter::new(valuations, transactions))
}

pub fn load_portfolio(data_port: &dyn DataPort) -> Result<Portfolio, PortfolioError> {
    let valuations = data_port.fetch_valuations()?;
    let transactions = data_port.fetch_transactions()?;
    Ok(Portfolio::new(valuations, transactions))
}

/// Command-line dates win over `[period]` keys. A date given on only one
/// side is paired with the configured other end.
pub fn resolve_period(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    config: &dyn ConfigPort,
) -> Result<(NaiveDate, NaiveDate), PortfolioError> {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        (start, end) => {
            let (cfg_start, cfg_end) = validate_period_config(config)?;
            (start.unwrap_or(cfg_start), end.unwrap_or(cfg_end))
        }
    };
    validate_date_order(start, end)?;
    Ok((start, end))
}

pub fn overall_output(portfolio: &Portfolio) -> Result<String, PortfolioError> {
    let r = portfolio.calculate_overall_return()?;
    Ok(format!("{r}"))
}

pub fn period_output(portfolio: &Portfolio, start: NaiveDate, end: NaiveDate) -> String {
    format!("{}", portfolio.calculate_period_return(start, end))
}

pub fn daily_output(portfolio: &Portfolio, date: NaiveDate) -> String {
    format!("{}", portfolio.sum_daily_transactions(date))
}

pub fn returns_output(portfolio: &Portfolio, start: NaiveDate, end: NaiveDate) -> String {
    portfolio
        .daily_returns(start, end)
        .iter()
        .map(|r| format!("{},{}", r.day, r.value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn run_command<F>(config_path: &PathBuf, compute: F) -> ExitCode
where
    F: FnOnce(&FileConfigAdapter, &Portfolio) -> Result<String, PortfolioError>,
{
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let portfolio = match build_data_port(&adapter).and_then(|port| load_portfolio(&port)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!(
        "Loaded {} valuations, {} transactions",
        portfolio.valuations().len(),
        portfolio.transactions().len()
    );

    match compute(&adapter, &portfolio) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let port = match build_data_port(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let has_period = adapter.get_string("period", "start_date").is_some()
        || adapter.get_string("period", "end_date").is_some();
    if has_period {
        match validate_period_config(&adapter) {
            Ok((start, end)) => eprintln!("  period: {} to {}", start, end),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    }

    let portfolio = match load_portfolio(&port) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("  valuations:   {}", portfolio.valuations().len());
    eprintln!("  transactions: {}", portfolio.transactions().len());
    if portfolio.valuations().is_empty() {
        eprintln!("warning: no valuations, overall return is unavailable");
    }

    eprintln!("\nValidation complete: configuration is valid");
    ExitCode::SUCCESS
}
