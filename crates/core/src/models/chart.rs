use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::history::SessionId;
use super::settings::Settings;

/// One stacked-bar series: a single stock across every portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// Stock symbol, also the series label
    pub symbol: String,

    /// One value per portfolio, aligned with `StackedBarChart::labels`.
    /// 0.0 means the portfolio does not hold this stock.
    pub values: Vec<f64>,

    /// Index into the shared palette (see `models::color`)
    pub color_index: usize,
}

/// Tooltip detail for one (portfolio, stock) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingDetail {
    pub shares: f64,
    pub value: f64,

    /// `None` when the holding records zero shares; the price is undefined
    /// for such a cell and is omitted from tooltips.
    pub price_per_share: Option<f64>,
}

/// Per-cell tooltip lookup: portfolio name → stock symbol → detail.
///
/// Presentation only. Chart geometry never reads this table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailIndex {
    entries: HashMap<String, HashMap<String, HoldingDetail>>,
}

impl DetailIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, portfolio: &str, symbol: &str, detail: HoldingDetail) {
        self.entries
            .entry(portfolio.to_string())
            .or_default()
            .insert(symbol.to_string(), detail);
    }

    #[must_use]
    pub fn get(&self, portfolio: &str, symbol: &str) -> Option<&HoldingDetail> {
        self.entries.get(portfolio)?.get(symbol)
    }

    /// Total number of (portfolio, stock) cells in the index.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Chart-ready stacked-bar data for a portfolio batch.
///
/// The renderer gets: category labels, per-category totals, one aligned
/// value array per stock, and the tooltip detail index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBarChart {
    /// Portfolio names in batch order (the x-axis categories)
    pub labels: Vec<String>,

    /// Reported total value per portfolio, aligned with `labels`
    pub totals: Vec<f64>,

    /// One series per stock, sorted by symbol
    pub series: Vec<BarSeries>,

    /// Tooltip detail per (portfolio, stock) cell
    pub detail_index: DetailIndex,
}

impl StackedBarChart {
    /// Look up a series by its stock symbol.
    #[must_use]
    pub fn series_for(&self, symbol: &str) -> Option<&BarSeries> {
        self.series.iter().find(|s| s.symbol == symbol)
    }

    /// Tooltip body for one hovered bar segment.
    ///
    /// Returns the value, price-per-share and share-count lines for the
    /// hovered (stock, portfolio) cell. The price line is omitted for
    /// zero-share cells. Falls back to a single "not in portfolio" line
    /// when the cell has no detail entry.
    #[must_use]
    pub fn tooltip_lines(
        &self,
        symbol: &str,
        category_index: usize,
        settings: &Settings,
    ) -> Vec<String> {
        let Some(portfolio_name) = self.labels.get(category_index) else {
            return Vec::new();
        };
        let unit = &settings.currency_unit;

        match self.detail_index.get(portfolio_name, symbol) {
            Some(detail) => {
                let mut lines = vec![format!("{symbol}: {} {unit}", detail.value)];
                if let Some(pps) = detail.price_per_share {
                    lines.push(format!("Price per Share: {pps} {unit}"));
                }
                lines.push(format!("Shares Held: {}", detail.shares));
                lines
            }
            None => vec![format!("{symbol}: 0 {unit} (not in portfolio)")],
        }
    }

    /// Tooltip header line with the hovered portfolio's total value.
    #[must_use]
    pub fn total_line(&self, category_index: usize, settings: &Settings) -> Option<String> {
        let total = self.totals.get(category_index)?;
        Some(format!("Total Value: {total} {}", settings.currency_unit))
    }
}

/// One line series: a single stock's price across the shared session axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    /// Stock symbol, also the series label
    pub symbol: String,

    /// One entry per session, aligned with `LineChart::sessions`.
    /// `None` marks a session with no observation; it serializes to JSON
    /// `null` and the renderer breaks the line there instead of plotting 0.
    pub points: Vec<Option<f64>>,

    /// Index into the shared palette (see `models::color`)
    pub color_index: usize,
}

/// Chart-ready line data for a stock history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    /// Sorted union of every session observed for any stock (the x-axis)
    pub sessions: Vec<SessionId>,

    /// One series per stock, sorted by symbol
    pub series: Vec<LineSeries>,
}

impl LineChart {
    /// Look up a series by its stock symbol.
    #[must_use]
    pub fn series_for(&self, symbol: &str) -> Option<&LineSeries> {
        self.series.iter().find(|s| s.symbol == symbol)
    }

    /// Tooltip title for a hovered x-axis position, e.g. "Session 3".
    #[must_use]
    pub fn session_title(&self, session_index: usize) -> Option<String> {
        self.sessions
            .get(session_index)
            .map(|session| format!("Session {session}"))
    }

    /// Tooltip label for one hovered point, e.g. "STCK: 12 cryo".
    ///
    /// Returns `None` at gap positions: there is no observation to describe.
    #[must_use]
    pub fn tooltip_label(
        &self,
        symbol: &str,
        session_index: usize,
        settings: &Settings,
    ) -> Option<String> {
        let price = (*self.series_for(symbol)?.points.get(session_index)?)?;
        Some(format!(
            "{symbol}: {:.0} {}",
            price, settings.currency_unit
        ))
    }
}
