//! Transform variant.
//!
//! Same min-index scan as the brute force variant, but the sell side is an
//! iterator pipeline: every price from the buy onward is mapped to its gain
//! over the buy price, and the largest gain is taken. Repeated on the prefix
//! ending at the minimum, like the brute force variant.

use super::min_buy_index;
use crate::calculator::ProfitCalculator;
use crate::series::{gain, Price, Profit};

#[derive(Debug, Clone, Copy, Default)]
pub struct Transform;

impl ProfitCalculator for Transform {
    fn name(&self) -> &str {
        "transform"
    }

    fn max_profit(&self, prices: &[Price]) -> Profit {
        max_profit_transform(prices)
    }
}

/// Maximum profit, computed by mapping the tail after the minimum to gains.
pub fn max_profit_transform(prices: &[Price]) -> Profit {
    let mut best = 0;
    let mut end = prices.len();

    while end >= 2 {
        let min_index = min_buy_index(prices, end);
        let min_price = prices[min_index];

        let tail_best = prices[min_index..end]
            .iter()
            .map(|&price| gain(min_price, price))
            .max()
            .unwrap_or(0);

        best = best.max(tail_best);
        end = min_index + 1;
    }

    best
}
