//! Portfolio return engine: valuation and cash-flow state plus the overall
//! and time-weighted return calculations over it.
//!
//! Valuations are trusted to be in ascending date order with at most one
//! point per day. Nothing here sorts, deduplicates or validates dates.

use chrono::NaiveDate;

use super::error::PortfolioError;
use super::returns::{compound_returns, period_return};
use super::transaction::{self, Transaction};
use super::valuation::ValuationPoint;

/// Return attributed to a single day of a period window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyReturn {
    pub day: NaiveDate,
    pub value: f64,
}

/// Overall and period returns for one window, computed together.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSummary {
    pub overall_return: f64,
    pub period_return: f64,
    pub window_len: usize,
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Portfolio {
    valuations: Vec<ValuationPoint>,
    transactions: Vec<Transaction>,
}

impl Portfolio {
    pub fn new(valuations: Vec<ValuationPoint>, transactions: Vec<Transaction>) -> Self {
        Portfolio {
            valuations,
            transactions,
        }
    }

    pub fn valuations(&self) -> &[ValuationPoint] {
        &self.valuations
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn add_valuation(&mut self, point: ValuationPoint) {
        self.valuations.push(point);
    }

    pub fn add_valuations<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = ValuationPoint>,
    {
        self.valuations.extend(points);
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn add_transactions<I>(&mut self, transactions: I)
    where
        I: IntoIterator<Item = Transaction>,
    {
        self.transactions.extend(transactions);
    }

    pub fn clear_valuations(&mut self) {
        self.valuations.clear();
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Holding-period return from the first to the last valuation, with the
    /// last day's cash flow added back.
    ///
    /// Fails with [`PortfolioError::EmptyData`] when there are no valuations.
    pub fn calculate_overall_return(&self) -> Result<f64, PortfolioError> {
        let (first, last) = match (self.valuations.first(), self.valuations.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(PortfolioError::EmptyData),
        };
        let cash_flow = self.sum_daily_transactions(last.day);
        Ok(period_return(first.value, last.value, cash_flow))
    }

    /// Time-weighted return over `[start, end]`, chain-linking the daily
    /// returns from [`Portfolio::daily_returns`]. An empty or single-entry
    /// window yields 0.
    pub fn calculate_period_return(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        let returns: Vec<f64> = self
            .daily_returns(start, end)
            .into_iter()
            .map(|r| r.value)
            .collect();
        compound_returns(&returns)
    }

    /// Sum of every transaction booked on exactly `date`, 0 if none.
    pub fn sum_daily_transactions(&self, date: NaiveDate) -> f64 {
        transaction::sum_on(&self.transactions, date)
    }

    /// Valuations with `start <= day <= end`, in their stored order.
    pub fn period_window(&self, start: NaiveDate, end: NaiveDate) -> Vec<ValuationPoint> {
        self.valuations
            .iter()
            .filter(|p| p.is_within(start, end))
            .copied()
            .collect()
    }

    /// Per-day returns over the window. The first entry is the baseline and
    /// always 0; each later entry is measured against the previous entry in
    /// the window, with that day's own cash flow added back.
    pub fn daily_returns(&self, start: NaiveDate, end: NaiveDate) -> Vec<DailyReturn> {
        let window = self.period_window(start, end);
        let Some(baseline) = window.first() else {
            return Vec::new();
        };

        let mut returns = Vec::with_capacity(window.len());
        returns.push(DailyReturn {
            day: baseline.day,
            value: 0.0,
        });
        returns.extend(window.windows(2).map(|pair| DailyReturn {
            day: pair[1].day,
            value: period_return(
                pair[0].value,
                pair[1].value,
                self.sum_daily_transactions(pair[1].day),
            ),
        }));
        returns
    }

    pub fn summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ReturnSummary, PortfolioError> {
        let overall_return = self.calculate_overall_return()?;
        let window = self.period_window(start, end);
        Ok(ReturnSummary {
            overall_return,
            period_return: self.calculate_period_return(start, end),
            window_len: window.len(),
            first_day: window.first().map(|p| p.day),
            last_day: window.last().map(|p| p.day),
        })
    }
}
