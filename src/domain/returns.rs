//! Return formulas: single-period cash-flow-adjusted return and
//! geometric chain-linking of sub-period returns.

/// `(final + cash_flow - initial) / initial`
///
/// Cash flow on the closing day is added back so that deposits do not count
/// as performance. A zero `initial` is not special-cased and yields a
/// non-finite result.
pub fn period_return(initial_value: f64, final_value: f64, cash_flow: f64) -> f64 {
    (final_value + cash_flow - initial_value) / initial_value
}

/// `∏(1 + r) - 1`, with the product starting at 1. An empty slice yields 0.
pub fn compound_returns(returns: &[f64]) -> f64 {
    returns.iter().fold(1.0, |acc, r| acc * (1.0 + r)) - 1.0
}
