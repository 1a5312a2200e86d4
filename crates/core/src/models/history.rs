use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Integer-indexed time step in stock history data.
pub type SessionId = u32;

/// Per-stock, per-session price observations.
///
/// Sessions are neither contiguous nor complete per stock: a stock listed
/// late or delisted early simply has no entry for those sessions. The JSON
/// source stores session numbers as object keys; serde_json parses them
/// back into integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockHistory {
    pub prices: HashMap<String, HashMap<SessionId, f64>>,
}

impl StockHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one price observation.
    pub fn record(&mut self, symbol: impl Into<String>, session: SessionId, price: f64) {
        self.prices
            .entry(symbol.into())
            .or_default()
            .insert(session, price);
    }

    /// Get the recorded price for a stock at a session, if observed.
    #[must_use]
    pub fn get(&self, symbol: &str, session: SessionId) -> Option<f64> {
        self.prices.get(symbol)?.get(&session).copied()
    }

    /// Number of distinct stocks in the history.
    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.prices.len()
    }

    /// Total number of price observations across all stocks.
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.prices.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
