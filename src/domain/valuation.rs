//! Daily market valuation of the whole portfolio.

use chrono::NaiveDate;

/// Total market value of the portfolio at the close of `day`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationPoint {
    pub value: f64,
    pub day: NaiveDate,
}

impl ValuationPoint {
    pub fn new(value: f64, day: NaiveDate) -> Self {
        ValuationPoint { value, day }
    }

    /// Inclusive on both ends.
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.day && self.day <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn within_is_inclusive() {
        let point = ValuationPoint::new(1000.0, day(2));
        assert!(point.is_within(day(2), day(2)));
        assert!(point.is_within(day(1), day(2)));
        assert!(point.is_within(day(2), day(3)));
    }

    #[test]
    fn outside_window() {
        let point = ValuationPoint::new(1000.0, day(5));
        assert!(!point.is_within(day(1), day(4)));
        assert!(!point.is_within(day(6), day(9)));
    }

    #[test]
    fn inverted_window_matches_nothing() {
        let point = ValuationPoint::new(1000.0, day(2));
        assert!(!point.is_within(day(3), day(1)));
    }
}
