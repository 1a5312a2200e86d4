use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::chart::{LineChart, LineSeries};
use crate::models::history::{SessionId, StockHistory};

/// Builds line-chart series from per-stock session prices.
pub struct HistoryService;

impl HistoryService {
    pub fn new() -> Self {
        Self
    }

    /// Build one line series per stock, aligned to the shared session axis.
    ///
    /// The x-axis is the sorted union of every session number observed for
    /// any stock. Series order is lexicographic by symbol and the palette
    /// index equals the sorted position. A stock with no observation for a
    /// session gets `None` at that position; the renderer breaks the line
    /// there rather than plotting zero.
    pub fn build_series(&self, history: &StockHistory) -> Result<LineChart, CoreError> {
        if history.is_empty() {
            return Err(CoreError::EmptyHistory);
        }

        let mut sessions: Vec<SessionId> = history
            .prices
            .values()
            .flat_map(|by_session| by_session.keys().copied())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        sessions.sort_unstable();

        let mut symbols: Vec<&String> = history.prices.keys().collect();
        symbols.sort();

        let series = symbols
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| {
                let by_session = &history.prices[symbol];
                LineSeries {
                    symbol: symbol.clone(),
                    points: sessions
                        .iter()
                        .map(|session| by_session.get(session).copied())
                        .collect(),
                    color_index: index,
                }
            })
            .collect();

        Ok(LineChart { sessions, series })
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}
