//! The three maximum-profit variants.
//!
//! `one_pass` is the production algorithm. `brute_force` and `transform` are
//! reference implementations kept for comparison and benchmarking; all three
//! agree on every input.

pub mod brute_force;
pub mod one_pass;
pub mod transform;

pub use brute_force::{max_profit_brute_force, BruteForce};
pub use one_pass::{max_profit_one_pass, OnePass};
pub use transform::{max_profit_transform, Transform};

/// Index of the lowest price in `prices[..end - 1]`, the window a buy can
/// come from when the last sell position is `end - 1`. Earliest index wins
/// on ties.
///
/// Callers guarantee `end >= 2`.
pub(crate) fn min_buy_index(prices: &[crate::series::Price], end: usize) -> usize {
    let mut min_index = 0;
    for i in 1..end - 1 {
        if prices[i] < prices[min_index] {
            min_index = i;
        }
    }
    min_index
}
