//! BestTrade — the buy/sell pair behind the maximum profit.

use crate::series::{gain, Price, Profit};
use serde::{Deserialize, Serialize};

/// The single buy-then-sell trade realising the maximum profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTrade {
    pub buy_index: usize,
    pub sell_index: usize,
    pub buy_price: Price,
    pub sell_price: Price,
    pub profit: Profit,
}

impl BestTrade {
    /// Number of time steps the position is held.
    pub fn holding_period(&self) -> usize {
        self.sell_index - self.buy_index
    }
}

/// Locate the most profitable trade in one pass.
///
/// Returns `None` when no trade makes money. On ties the earliest buy at the
/// lowest price and the earliest sell reaching the best profit are kept.
pub fn best_trade(prices: &[Price]) -> Option<BestTrade> {
    let mut iter = prices.iter().copied().enumerate();
    let (_, first) = iter.next()?;

    let mut lowest = first;
    let mut lowest_index = 0;
    let mut best: Option<BestTrade> = None;

    for (i, price) in iter {
        if price < lowest {
            lowest = price;
            lowest_index = i;
            continue;
        }

        let profit = gain(lowest, price);
        if profit > best.map_or(0, |t| t.profit) {
            best = Some(BestTrade {
                buy_index: lowest_index,
                sell_index: i,
                buy_price: lowest,
                sell_price: price,
                profit,
            });
        }
    }

    best
}
