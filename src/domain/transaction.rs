//! External cash flows into and out of the portfolio.

use chrono::NaiveDate;

/// A deposit (positive `value`) or withdrawal (negative `value`) on `day`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    pub value: f64,
    pub day: NaiveDate,
}

impl Transaction {
    pub fn new(value: f64, day: NaiveDate) -> Self {
        Transaction { value, day }
    }
}

/// Sum of the values of every transaction booked on exactly `day`, 0 if none.
pub fn sum_on(transactions: &[Transaction], day: NaiveDate) -> f64 {
    transactions
        .iter()
        .filter(|t| t.day == day)
        .fold(0.0, |acc, t| acc + t.value)
}
