//! Data access port trait.

use crate::domain::error::PortfolioError;
use crate::domain::transaction::Transaction;
use crate::domain::valuation::ValuationPoint;

/// Source of the valuation and cash-flow series fed into a
/// [`Portfolio`](crate::domain::portfolio::Portfolio).
///
/// Implementations return rows in source order and must not sort them.
pub trait DataPort {
    fn fetch_valuations(&self) -> Result<Vec<ValuationPoint>, PortfolioError>;

    fn fetch_transactions(&self) -> Result<Vec<Transaction>, PortfolioError>;
}
