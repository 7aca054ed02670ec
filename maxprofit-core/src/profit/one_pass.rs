//! Single-pass O(n) variant.
//!
//! Tracks the lowest price seen so far and the best gain over it. A new low
//! only replaces the running minimum; any other price is a sell candidate.

use crate::calculator::ProfitCalculator;
use crate::series::{gain, Price, Profit};

#[derive(Debug, Clone, Copy, Default)]
pub struct OnePass;

impl ProfitCalculator for OnePass {
    fn name(&self) -> &str {
        "one_pass"
    }

    fn max_profit(&self, prices: &[Price]) -> Profit {
        max_profit_one_pass(prices)
    }
}

/// Maximum profit in one linear scan.
pub fn max_profit_one_pass(prices: &[Price]) -> Profit {
    let Some(&first) = prices.first() else {
        return 0;
    };

    let mut lowest = first;
    let mut best = 0;

    for &price in prices {
        if price < lowest {
            lowest = price;
        } else {
            best = best.max(gain(lowest, price));
        }
    }

    best
}
