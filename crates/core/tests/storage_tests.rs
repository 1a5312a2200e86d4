// ═══════════════════════════════════════════════════════════════════
// Storage Tests — DataLoader JSON parsing, file I/O failure modes
// ═══════════════════════════════════════════════════════════════════

use std::io::Write;

use stock_charts_core::errors::CoreError;
use stock_charts_core::storage::loader::DataLoader;

const SNAPSHOTS_JSON: &str = r#"[
    {
        "name": "Alice",
        "portfolio_value": 250,
        "portfolio": {
            "STCK": {"shares held": 5, "value": 150},
            "MINE": {"shares held": 2, "value": 100}
        }
    },
    {
        "name": "Bob",
        "portfolio_value": 0,
        "portfolio": {}
    }
]"#;

const HISTORY_JSON: &str = r#"{
    "STCK": {"1": 10, "3": 12},
    "ORE": {"2": 5}
}"#;

// ═══════════════════════════════════════════════════════════════════
// Snapshot batches
// ═══════════════════════════════════════════════════════════════════

mod snapshots {
    use super::*;

    #[test]
    fn parses_batch_from_bytes() {
        let batch = DataLoader::snapshots_from_bytes(SNAPSHOTS_JSON.as_bytes()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].name, "Alice");
        assert_eq!(batch[0].portfolio["STCK"].shares_held, 5.0);
        assert!(batch[1].portfolio.is_empty());
    }

    #[test]
    fn batch_order_is_preserved() {
        let batch = DataLoader::snapshots_from_bytes(SNAPSHOTS_JSON.as_bytes()).unwrap();
        let names: Vec<&str> = batch.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn empty_array_parses_to_empty_batch() {
        let batch = DataLoader::snapshots_from_bytes(b"[]").unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let result = DataLoader::snapshots_from_bytes(b"{not json");
        assert!(matches!(result, Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn wrong_shape_is_a_deserialization_error() {
        // A history-shaped object is not a snapshot batch.
        let result = DataLoader::snapshots_from_bytes(HISTORY_JSON.as_bytes());
        assert!(matches!(result, Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOTS_JSON.as_bytes()).unwrap();
        let batch = DataLoader::snapshots_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn missing_file_is_a_file_io_error() {
        let result = DataLoader::snapshots_from_file("/nonexistent/sharedata.json");
        assert!(matches!(result, Err(CoreError::FileIO(_))));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Stock histories
// ═══════════════════════════════════════════════════════════════════

mod history {
    use super::*;

    #[test]
    fn parses_history_from_bytes() {
        let history = DataLoader::history_from_bytes(HISTORY_JSON.as_bytes()).unwrap();
        assert_eq!(history.stock_count(), 2);
        assert_eq!(history.get("STCK", 1), Some(10.0));
        assert_eq!(history.get("ORE", 2), Some(5.0));
        assert_eq!(history.get("STCK", 2), None);
    }

    #[test]
    fn empty_object_parses_to_empty_history() {
        let history = DataLoader::history_from_bytes(b"{}").unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn non_integer_session_key_is_a_deserialization_error() {
        let result = DataLoader::history_from_bytes(br#"{"STCK": {"opening": 10}}"#);
        assert!(matches!(result, Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let result = DataLoader::history_from_bytes(b"[1, 2");
        assert!(matches!(result, Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HISTORY_JSON.as_bytes()).unwrap();
        let history = DataLoader::history_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(history.stock_count(), 2);
    }

    #[test]
    fn missing_file_is_a_file_io_error() {
        let result = DataLoader::history_from_file("/nonexistent/stockdata.json");
        assert!(matches!(result, Err(CoreError::FileIO(_))));
    }
}
