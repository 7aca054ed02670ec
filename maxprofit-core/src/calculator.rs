//! ProfitCalculator trait.
//!
//! Calculators are pure functions: price series in, profit out. They hold no
//! state between calls, so the same input always yields the same profit.

use crate::series::{Price, Profit};

/// A maximum-profit algorithm.
///
/// Every implementation must return the same profit for the same input; the
/// variants differ only in how many passes they make over the series.
pub trait ProfitCalculator: Send + Sync {
    /// Stable variant name (e.g., "one_pass").
    fn name(&self) -> &str;

    /// Best `prices[sell] - prices[buy]` with `buy < sell`, or 0 when no
    /// profitable trade exists (including series shorter than two prices).
    fn max_profit(&self, prices: &[Price]) -> Profit;
}
