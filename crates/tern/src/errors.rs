use serde::{Deserialize, Serialize};
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug, Clone, Deserialize, Serialize, PartialEq)]
pub enum BridgeError {
    /// No usable credential was resolved. Not recoverable without operator
    /// action; never retried.
    #[error("Not configured: {0}")]
    Configuration(String),

    /// The completion service rejected or failed the request. Wraps the
    /// underlying failure so callers only see this crate's error kinds.
    #[error("Completion request failed: {0}")]
    Completion(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// The standard configuration failure, with the instruction an operator
    /// needs to resolve it.
    pub fn not_configured() -> Self {
        BridgeError::Configuration(
            "no API key found, set GOOGLE_API_KEY in the environment or your .env file"
                .to_string(),
        )
    }
}
