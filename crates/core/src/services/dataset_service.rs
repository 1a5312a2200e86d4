use std::collections::HashSet;

use log::warn;

use crate::errors::CoreError;
use crate::models::chart::{BarSeries, DetailIndex, HoldingDetail, StackedBarChart};
use crate::models::portfolio::PortfolioSnapshot;

/// Builds stacked-bar chart datasets from portfolio snapshots.
///
/// Pure reshaping, no I/O. The same input always produces the same output,
/// color assignment included.
pub struct DatasetService;

impl DatasetService {
    pub fn new() -> Self {
        Self
    }

    /// Build the full stacked-bar structure for a batch of snapshots.
    ///
    /// Series order is lexicographic by stock symbol, and a series' palette
    /// index equals its sorted position. Values align with the snapshot
    /// batch order, which fixes the x-axis categories. A portfolio that does
    /// not hold a stock contributes 0.0 to that series, which must render as
    /// no visible segment.
    pub fn build_datasets(
        &self,
        snapshots: &[PortfolioSnapshot],
    ) -> Result<StackedBarChart, CoreError> {
        if snapshots.is_empty() {
            return Err(CoreError::EmptyPortfolioBatch);
        }

        // Union of stock symbols across the whole batch, sorted. This fixes
        // both series order and color assignment.
        let mut symbols: Vec<String> = snapshots
            .iter()
            .flat_map(|s| s.portfolio.keys().cloned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        symbols.sort();

        let series = symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| BarSeries {
                symbol: symbol.clone(),
                values: snapshots
                    .iter()
                    .map(|s| s.portfolio.get(symbol).map_or(0.0, |h| h.value))
                    .collect(),
                color_index: index,
            })
            .collect();

        Ok(StackedBarChart {
            labels: snapshots.iter().map(|s| s.name.clone()).collect(),
            totals: snapshots.iter().map(|s| s.portfolio_value).collect(),
            series,
            detail_index: self.build_detail_index(snapshots),
        })
    }

    /// Build the per-cell tooltip lookup: shares, value and price per share
    /// for every (portfolio, stock) pair in the batch.
    ///
    /// A holding that records zero shares has no defined price per share.
    /// The cell keeps its shares and value, the price is omitted, and the
    /// anomaly is logged. Such cells never abort the build.
    pub fn build_detail_index(&self, snapshots: &[PortfolioSnapshot]) -> DetailIndex {
        let mut index = DetailIndex::new();

        for snapshot in snapshots {
            for (symbol, holding) in &snapshot.portfolio {
                let price_per_share = if holding.shares_held == 0.0 {
                    warn!(
                        "holding {symbol} in portfolio '{}' records zero shares (value {}); omitting price per share",
                        snapshot.name, holding.value
                    );
                    None
                } else {
                    Some(holding.value / holding.shares_held)
                };

                index.insert(
                    &snapshot.name,
                    symbol,
                    HoldingDetail {
                        shares: holding.shares_held,
                        value: holding.value,
                        price_per_share,
                    },
                );
            }
        }

        index
    }
}

impl Default for DatasetService {
    fn default() -> Self {
        Self::new()
    }
}
