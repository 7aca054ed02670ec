//! Price series — the read-only input to every profit calculator.
//!
//! A series is an ordered list of integer prices, one per time step. The
//! algorithms take `&[Price]` directly; `PriceSeries` is the owned form used
//! when a series has to be parsed, stored, or embedded in a document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use thiserror::Error;

/// A single price at one time step.
pub type Price = i64;

/// Best single buy-then-sell gain. Never negative.
pub type Profit = u64;

/// Gain from buying at `buy` and selling at `sell`, floored at zero.
///
/// `abs_diff` keeps the full `i64` range representable: the widest gain,
/// `i64::MAX - i64::MIN`, is exactly `u64::MAX`.
#[inline]
pub fn gain(buy: Price, sell: Price) -> Profit {
    if sell > buy {
        sell.abs_diff(buy)
    } else {
        0
    }
}

/// Errors raised while building a `PriceSeries` from text.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("invalid price {token:?} at position {position}")]
    InvalidPrice { position: usize, token: String },

    #[error("malformed price series JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Owned, ordered sequence of prices.
///
/// Serializes as a plain array (`[4, 2, 1, 3, 7]`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<Price>);

impl PriceSeries {
    pub fn new(prices: Vec<Price>) -> Self {
        Self(prices)
    }

    /// Parse a JSON array of integers.
    pub fn from_json(json: &str) -> Result<Self, SeriesError> {
        let series: Self = serde_json::from_str(json)?;
        tracing::debug!(len = series.len(), "parsed price series from JSON");
        Ok(series)
    }

    pub fn as_slice(&self) -> &[Price] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Price> {
        self.0
    }
}

impl From<Vec<Price>> for PriceSeries {
    fn from(prices: Vec<Price>) -> Self {
        Self(prices)
    }
}

impl From<&[Price]> for PriceSeries {
    fn from(prices: &[Price]) -> Self {
        Self(prices.to_vec())
    }
}

impl FromIterator<Price> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = Price>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[Price]> for PriceSeries {
    fn as_ref(&self) -> &[Price] {
        &self.0
    }
}

impl Deref for PriceSeries {
    type Target = [Price];

    fn deref(&self) -> &[Price] {
        &self.0
    }
}

/// Parses a comma and/or whitespace separated list, e.g. `"4, 2, 1, 3, 7"`.
/// Surrounding brackets are tolerated so `Display` output parses back.
/// A blank string is the empty series.
impl FromStr for PriceSeries {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim();
        let body = body
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(body);

        let prices = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token.parse::<Price>().map_err(|_| SeriesError::InvalidPrice {
                    position,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(len = prices.len(), "parsed price series from text");
        Ok(Self(prices))
    }
}

impl fmt::Display for PriceSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, price) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{price}")?;
        }
        write!(f, "]")
    }
}
