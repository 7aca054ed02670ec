//! Brute force two-pass variant.
//!
//! Pass 1: index of the lowest price, ignoring the last position (a buy must
//! be followed by a sell). Pass 2: index of the highest price from that buy
//! onward. The difference is the best trade that buys at or after the minimum.
//!
//! A trade that both buys and sells before the minimum is not seen by those
//! two passes, so they are repeated on `prices[..=min_index]` until the window
//! is shorter than two prices. Worst case (strictly decreasing) is O(n²).

use super::min_buy_index;
use crate::calculator::ProfitCalculator;
use crate::series::{gain, Price, Profit};

#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl ProfitCalculator for BruteForce {
    fn name(&self) -> &str {
        "brute_force"
    }

    fn max_profit(&self, prices: &[Price]) -> Profit {
        max_profit_brute_force(prices)
    }
}

/// Maximum profit, computed with repeated min-index / max-index scans.
pub fn max_profit_brute_force(prices: &[Price]) -> Profit {
    let mut best = 0;
    let mut end = prices.len();

    // Need at least two prices
    while end >= 2 {
        let min_index = min_buy_index(prices, end);

        let mut max_index = min_index;
        for i in min_index + 1..end {
            if prices[i] > prices[max_index] {
                max_index = i;
            }
        }

        best = best.max(gain(prices[min_index], prices[max_index]));

        // min_index <= end - 2, so the window always shrinks
        end = min_index + 1;
    }

    best
}
