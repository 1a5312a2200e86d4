// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use stock_charts_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn empty_portfolio_batch() {
        let err = CoreError::EmptyPortfolioBatch;
        assert_eq!(
            err.to_string(),
            "Empty portfolio batch: no snapshots to chart"
        );
    }

    #[test]
    fn empty_history() {
        let err = CoreError::EmptyHistory;
        assert_eq!(err.to_string(), "Empty stock history: no stocks to chart");
    }

    #[test]
    fn unknown_symbol() {
        let err = CoreError::UnknownSymbol("XYZ".into());
        assert_eq!(err.to_string(), "Unknown symbol: XYZ");
    }

    #[test]
    fn unknown_symbol_empty_string() {
        let err = CoreError::UnknownSymbol(String::new());
        assert_eq!(err.to_string(), "Unknown symbol: ");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CoreError = io_err.into();
        match err {
            CoreError::FileIO(msg) => assert!(msg.contains("no such file")),
            other => panic!("expected FileIO, got {other:?}"),
        }
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn from_serde_json_error_keeps_message() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let expected = json_err.to_string();
        let err: CoreError = json_err.into();
        match err {
            CoreError::Deserialization(msg) => assert_eq!(msg, expected),
            other => panic!("expected Deserialization, got {other:?}"),
        }
    }
}

// ── Trait coverage ──────────────────────────────────────────────────

mod traits {
    use super::*;

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::EmptyHistory);
    }

    #[test]
    fn debug_format_names_variant() {
        let err = CoreError::UnknownSymbol("ABC".into());
        let debug = format!("{err:?}");
        assert!(debug.contains("UnknownSymbol"));
        assert!(debug.contains("ABC"));
    }
}
