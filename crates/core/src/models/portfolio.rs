use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One stock position inside a portfolio snapshot.
///
/// The data files spell the share count as `"shares held"` (with a space);
/// the serde rename keeps us wire-compatible with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Number of shares held
    #[serde(rename = "shares held")]
    pub shares_held: f64,

    /// Total value of the position in the display currency
    pub value: f64,
}

impl Holding {
    pub fn new(shares_held: f64, value: f64) -> Self {
        Self { shares_held, value }
    }
}

/// One person's portfolio at a point in time.
///
/// A batch of these is the input to the stacked-bar dataset builder.
/// Batch order is significant: it defines the x-axis category order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Owner's display name, used as the x-axis label
    pub name: String,

    /// Total portfolio value as reported by the data source
    pub portfolio_value: f64,

    /// Holdings keyed by stock symbol
    pub portfolio: HashMap<String, Holding>,
}

impl PortfolioSnapshot {
    pub fn new(name: impl Into<String>, portfolio_value: f64) -> Self {
        Self {
            name: name.into(),
            portfolio_value,
            portfolio: HashMap::new(),
        }
    }

    /// Builder-style helper for assembling a snapshot holding by holding.
    #[must_use]
    pub fn with_holding(mut self, symbol: impl Into<String>, shares_held: f64, value: f64) -> Self {
        self.portfolio
            .insert(symbol.into(), Holding::new(shares_held, value));
        self
    }

    /// Whether this snapshot holds the given stock.
    #[must_use]
    pub fn holds(&self, symbol: &str) -> bool {
        self.portfolio.contains_key(symbol)
    }
}
