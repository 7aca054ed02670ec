//! Property tests for the profit calculators.
//!
//! Uses proptest to verify:
//! 1. Cross-variant equivalence — all three variants agree on every input
//! 2. Oracle agreement — the variants match an exhaustive all-pairs search
//! 3. Idempotence — repeated calls on the same input agree
//! 4. Best trade consistency — positions are ordered and realise the profit
//! 5. Trailing new low — appending a price below every other never changes the profit

use maxprofit_core::{
    best_trade, max_profit_brute_force, max_profit_one_pass, max_profit_transform, Price, Profit,
    Variant,
};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_prices() -> impl Strategy<Value = Vec<Price>> {
    prop::collection::vec(-1_000..1_000_i64, 0..64)
}

fn arb_extreme_prices() -> impl Strategy<Value = Vec<Price>> {
    prop::collection::vec(any::<i64>(), 0..16)
}

/// Exhaustive O(n²) reference: every (buy, sell) pair with buy < sell.
fn all_pairs_profit(prices: &[Price]) -> Profit {
    let mut best = 0;
    for buy in 0..prices.len() {
        for sell in buy + 1..prices.len() {
            if prices[sell] > prices[buy] {
                best = best.max(prices[sell].abs_diff(prices[buy]));
            }
        }
    }
    best
}

// ── 1. Cross-variant equivalence ─────────────────────────────────────

proptest! {
    #[test]
    fn variants_agree(prices in arb_prices()) {
        let one_pass = max_profit_one_pass(&prices);
        prop_assert_eq!(max_profit_brute_force(&prices), one_pass);
        prop_assert_eq!(max_profit_transform(&prices), one_pass);
    }

    #[test]
    fn variants_agree_on_extreme_values(prices in arb_extreme_prices()) {
        let one_pass = max_profit_one_pass(&prices);
        prop_assert_eq!(max_profit_brute_force(&prices), one_pass);
        prop_assert_eq!(max_profit_transform(&prices), one_pass);
    }
}

// ── 2. Oracle agreement ──────────────────────────────────────────────

proptest! {
    #[test]
    fn matches_all_pairs_oracle(prices in arb_prices()) {
        let expected = all_pairs_profit(&prices);
        for variant in Variant::ALL {
            prop_assert_eq!(variant.max_profit(&prices), expected, "{}", variant);
        }
    }

    #[test]
    fn short_series_is_zero(prices in prop::collection::vec(any::<i64>(), 0..2)) {
        for variant in Variant::ALL {
            prop_assert_eq!(variant.max_profit(&prices), 0);
        }
    }
}

// ── 3. Idempotence ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_calls_agree(prices in arb_prices()) {
        for variant in Variant::ALL {
            let calc = variant.calculator();
            prop_assert_eq!(calc.max_profit(&prices), calc.max_profit(&prices));
        }
    }
}

// ── 4. Best trade consistency ────────────────────────────────────────

proptest! {
    #[test]
    fn best_trade_realises_profit(prices in arb_prices()) {
        let profit = max_profit_one_pass(&prices);
        match best_trade(&prices) {
            None => prop_assert_eq!(profit, 0),
            Some(trade) => {
                prop_assert!(trade.buy_index < trade.sell_index);
                prop_assert_eq!(prices[trade.buy_index], trade.buy_price);
                prop_assert_eq!(prices[trade.sell_index], trade.sell_price);
                prop_assert_eq!(trade.profit, profit);
                prop_assert!(trade.profit > 0);
            }
        }
    }
}

// ── 5. Trailing new low ──────────────────────────────────────────────

proptest! {
    #[test]
    fn trailing_new_low_is_ignored(prices in arb_prices()) {
        let before = max_profit_one_pass(&prices);
        let mut extended = prices.clone();
        extended.push(-2_000);
        for variant in Variant::ALL {
            prop_assert_eq!(variant.max_profit(&extended), before, "{}", variant);
        }
    }

    #[test]
    fn strictly_decreasing_is_zero(start in -1_000..1_000_i64, len in 0..64_usize) {
        let prices: Vec<Price> = (0..len as i64).map(|i| start - i).collect();
        for variant in Variant::ALL {
            prop_assert_eq!(variant.max_profit(&prices), 0);
        }
    }
}
