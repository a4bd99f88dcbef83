//! From trait implementations for RustgdbError conversions

use super::types::RustgdbError;

impl From<std::io::Error> for RustgdbError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for RustgdbError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}
