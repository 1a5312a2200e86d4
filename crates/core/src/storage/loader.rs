use log::debug;

use crate::errors::CoreError;
use crate::models::history::StockHistory;
use crate::models::portfolio::PortfolioSnapshot;

/// Reads the two chart inputs from their JSON sources.
///
/// Byte-slice variants work everywhere, including WASM where the frontend
/// does the file I/O and hands us the content. Path variants are native
/// only.
pub struct DataLoader;

impl DataLoader {
    /// Parse a portfolio snapshot batch from raw JSON bytes.
    ///
    /// The batch may legitimately be empty; the dataset builder decides
    /// whether that is an error for its caller.
    pub fn snapshots_from_bytes(data: &[u8]) -> Result<Vec<PortfolioSnapshot>, CoreError> {
        let snapshots: Vec<PortfolioSnapshot> = serde_json::from_slice(data)?;
        if snapshots.is_empty() {
            debug!("portfolio batch parsed to zero snapshots");
        }
        Ok(snapshots)
    }

    /// Parse a stock history mapping from raw JSON bytes.
    pub fn history_from_bytes(data: &[u8]) -> Result<StockHistory, CoreError> {
        let history: StockHistory = serde_json::from_slice(data)?;
        if history.is_empty() {
            debug!("stock history parsed to zero stocks");
        }
        Ok(history)
    }

    /// Read and parse a portfolio snapshot batch from a JSON file (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn snapshots_from_file(path: &str) -> Result<Vec<PortfolioSnapshot>, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::snapshots_from_bytes(&bytes)
    }

    /// Read and parse a stock history from a JSON file (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn history_from_file(path: &str) -> Result<StockHistory, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::history_from_bytes(&bytes)
    }
}
