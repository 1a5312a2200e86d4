use serde::{Deserialize, Serialize};

/// User-configurable presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Unit appended to money amounts in tooltip text (e.g., "cryo", "USD").
    pub currency_unit: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_unit: "cryo".to_string(),
        }
    }
}
