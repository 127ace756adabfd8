use serde::{Deserialize, Serialize};

/// A record that failed parsing or validation, kept for caller display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidEntry {
    pub raw: String,
    pub reason: String,
}

impl InvalidEntry {
    pub fn new(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}
