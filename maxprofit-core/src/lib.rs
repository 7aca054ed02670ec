//! maxprofit core — best single buy/sell profit over a price series.
//!
//! This crate contains:
//! - Price series types (`Price`, `Profit`, `PriceSeries`)
//! - The `ProfitCalculator` trait
//! - Three equivalent algorithms: brute force, transform, one-pass
//! - Best trade extraction (buy and sell positions)
//! - A factory mapping variant names to calculators
//!
//! All functions are pure: no shared state, no I/O, no failure on short input.

pub mod calculator;
pub mod factory;
pub mod profit;
pub mod series;
pub mod trade;

pub use calculator::ProfitCalculator;
pub use factory::{all_calculators, create_calculator, FactoryError, Variant};
pub use profit::{
    max_profit_brute_force, max_profit_one_pass, max_profit_transform, BruteForce, OnePass,
    Transform,
};
pub use series::{Price, PriceSeries, Profit, SeriesError};
pub use trade::{best_trade, BestTrade};
