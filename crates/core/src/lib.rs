pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use models::chart::{LineChart, LineSeries, StackedBarChart};
use models::history::StockHistory;
use models::portfolio::PortfolioSnapshot;
use models::settings::Settings;
use services::dataset_service::DatasetService;
use services::history_service::HistoryService;
use services::visibility_service::SeriesVisibility;
use storage::loader::DataLoader;

use errors::CoreError;

/// Main entry point for the stock-charts core library.
///
/// One `ChartSession` backs one rendered chart page: it owns the loaded
/// inputs, the dataset builders, presentation settings, and the series
/// visibility state the renderer consults. The builders themselves stay
/// pure; the session is the single place where state lives.
#[must_use]
pub struct ChartSession {
    snapshots: Vec<PortfolioSnapshot>,
    history: StockHistory,
    settings: Settings,
    dataset_service: DatasetService,
    history_service: HistoryService,
    /// Per-symbol visibility, registered when a history chart is built.
    visibility: SeriesVisibility,
}

impl std::fmt::Debug for ChartSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartSession")
            .field("snapshots", &self.snapshots.len())
            .field("stocks", &self.history.stock_count())
            .field("settings", &self.settings)
            .field("registered_series", &self.visibility.len())
            .finish()
    }
}

impl ChartSession {
    /// Create an empty session with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create an empty session with explicit settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            snapshots: Vec::new(),
            history: StockHistory::new(),
            settings,
            dataset_service: DatasetService::new(),
            history_service: HistoryService::new(),
            visibility: SeriesVisibility::default(),
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Load a portfolio snapshot batch from raw JSON bytes.
    /// Returns the number of snapshots loaded.
    pub fn load_snapshots_from_bytes(&mut self, data: &[u8]) -> Result<usize, CoreError> {
        self.snapshots = DataLoader::snapshots_from_bytes(data)?;
        Ok(self.snapshots.len())
    }

    /// Load a stock history from raw JSON bytes.
    /// Returns the number of distinct stocks loaded.
    pub fn load_history_from_bytes(&mut self, data: &[u8]) -> Result<usize, CoreError> {
        self.history = DataLoader::history_from_bytes(data)?;
        Ok(self.history.stock_count())
    }

    /// Load a portfolio snapshot batch from a JSON file (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_snapshots_from_file(&mut self, path: &str) -> Result<usize, CoreError> {
        self.snapshots = DataLoader::snapshots_from_file(path)?;
        Ok(self.snapshots.len())
    }

    /// Load a stock history from a JSON file (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_history_from_file(&mut self, path: &str) -> Result<usize, CoreError> {
        self.history = DataLoader::history_from_file(path)?;
        Ok(self.history.stock_count())
    }

    /// Use an already-parsed snapshot batch.
    pub fn set_snapshots(&mut self, snapshots: Vec<PortfolioSnapshot>) {
        self.snapshots = snapshots;
    }

    /// Use an already-parsed stock history.
    pub fn set_history(&mut self, history: StockHistory) {
        self.history = history;
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Build the stacked-bar chart for the loaded snapshot batch.
    pub fn build_portfolio_chart(&self) -> Result<StackedBarChart, CoreError> {
        self.dataset_service.build_datasets(&self.snapshots)
    }

    /// Build the line chart for the loaded stock history.
    ///
    /// Also (re)registers the visibility controller from the built series,
    /// every series visible.
    pub fn build_history_chart(&mut self) -> Result<LineChart, CoreError> {
        let chart = self.history_service.build_series(&self.history)?;
        self.visibility = SeriesVisibility::new(chart.series.iter().map(|s| s.symbol.clone()));
        Ok(chart)
    }

    /// The series the renderer should plot under the current visibility
    /// state. Before any history chart is built (nothing registered), every
    /// series is shown.
    #[must_use]
    pub fn visible_series<'a>(&self, chart: &'a LineChart) -> Vec<&'a LineSeries> {
        if self.visibility.is_empty() {
            return chart.series.iter().collect();
        }
        chart
            .series
            .iter()
            .filter(|s| self.visibility.is_visible(&s.symbol).unwrap_or(false))
            .collect()
    }

    // ── Visibility ──────────────────────────────────────────────────

    /// Flip one series' visibility. Returns the new state.
    pub fn toggle_symbol(&mut self, symbol: &str) -> Result<bool, CoreError> {
        self.visibility.toggle(symbol)
    }

    /// Show every registered series.
    pub fn select_all(&mut self) {
        self.visibility.select_all();
    }

    /// Hide every registered series.
    pub fn select_none(&mut self) {
        self.visibility.select_none();
    }

    /// Symbols currently shown, in registration order.
    #[must_use]
    pub fn visible_symbols(&self) -> Vec<&str> {
        self.visibility.visible_symbols()
    }

    /// Alphabetical display order for the symbol list (visibility untouched).
    #[must_use]
    pub fn sorted_symbols(&self) -> Vec<&str> {
        self.visibility.sorted_symbols()
    }

    /// The visibility controller itself, for callers wiring UI events.
    #[must_use]
    pub fn visibility(&self) -> &SeriesVisibility {
        &self.visibility
    }

    #[must_use]
    pub fn visibility_mut(&mut self) -> &mut SeriesVisibility {
        &mut self.visibility
    }

    // ── Tooltips ────────────────────────────────────────────────────

    /// Tooltip body for a hovered bar segment, formatted with the session's
    /// currency unit.
    #[must_use]
    pub fn portfolio_tooltip(
        &self,
        chart: &StackedBarChart,
        symbol: &str,
        category_index: usize,
    ) -> Vec<String> {
        chart.tooltip_lines(symbol, category_index, &self.settings)
    }

    /// Tooltip header line with a portfolio's total value.
    #[must_use]
    pub fn portfolio_total(&self, chart: &StackedBarChart, category_index: usize) -> Option<String> {
        chart.total_line(category_index, &self.settings)
    }

    /// Tooltip label for a hovered line-chart point. `None` at gaps.
    #[must_use]
    pub fn history_tooltip(
        &self,
        chart: &LineChart,
        symbol: &str,
        session_index: usize,
    ) -> Option<String> {
        chart.tooltip_label(symbol, session_index, &self.settings)
    }

    // ── Settings & Accessors ────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the unit appended to money amounts in tooltip text.
    pub fn set_currency_unit(&mut self, unit: impl Into<String>) {
        self.settings.currency_unit = unit.into();
    }

    /// Number of snapshots in the loaded batch.
    #[must_use]
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Number of distinct stocks in the loaded history.
    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.history.stock_count()
    }
}

impl Default for ChartSession {
    fn default() -> Self {
        Self::new()
    }
}
