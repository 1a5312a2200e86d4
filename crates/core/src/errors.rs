use thiserror::Error;

/// Unified error type for the entire stock-charts-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input data ──────────────────────────────────────────────────
    #[error("Empty portfolio batch: no snapshots to chart")]
    EmptyPortfolioBatch,

    #[error("Empty stock history: no stocks to chart")]
    EmptyHistory,

    // ── Visibility ──────────────────────────────────────────────────
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    // ── Storage / File ──────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
