//! Factory — turns a variant name into a runtime `ProfitCalculator`.
//!
//! `Variant` is the serializable selector; `create_calculator` resolves a name
//! string (as found in a benchmark table or a caller's config) to a boxed
//! calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::ProfitCalculator;
use crate::profit::{BruteForce, OnePass, Transform};
use crate::series::{Price, Profit};

// ─── Error type ──────────────────────────────────────────────────────

/// Errors that can occur during calculator construction.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Unknown profit variant: {0} (expected brute_force, transform or one_pass)")]
    UnknownVariant(String),
}

// ─── Variant ─────────────────────────────────────────────────────────

/// The three maximum-profit algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    BruteForce,
    Transform,
    OnePass,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::BruteForce, Variant::Transform, Variant::OnePass];

    pub fn name(self) -> &'static str {
        match self {
            Variant::BruteForce => "brute_force",
            Variant::Transform => "transform",
            Variant::OnePass => "one_pass",
        }
    }

    pub fn calculator(self) -> Box<dyn ProfitCalculator> {
        match self {
            Variant::BruteForce => Box::new(BruteForce),
            Variant::Transform => Box::new(Transform),
            Variant::OnePass => Box::new(OnePass),
        }
    }

    /// Run this variant directly, without boxing.
    pub fn max_profit(self, prices: &[Price]) -> Profit {
        match self {
            Variant::BruteForce => crate::profit::max_profit_brute_force(prices),
            Variant::Transform => crate::profit::max_profit_transform(prices),
            Variant::OnePass => crate::profit::max_profit_one_pass(prices),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the variant name case-insensitively, with `-` in place of `_`.
impl FromStr for Variant {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == normalized)
            .ok_or_else(|| FactoryError::UnknownVariant(s.to_string()))
    }
}

// ─── Factories ───────────────────────────────────────────────────────

/// Create a calculator from a variant name.
pub fn create_calculator(name: &str) -> Result<Box<dyn ProfitCalculator>, FactoryError> {
    let variant: Variant = name.parse()?;
    tracing::debug!(%variant, "created profit calculator");
    Ok(variant.calculator())
}

/// One calculator per variant, in `Variant::ALL` order.
pub fn all_calculators() -> Vec<Box<dyn ProfitCalculator>> {
    Variant::ALL.into_iter().map(Variant::calculator).collect()
}
