//! Structured error types for the converter.
//!
//! Only whole-document failures live here. A single bad shape is never an
//! error; it is recorded as a [`SkipReason`](crate::shapes::SkipReason) and left
//! out of the combined path.

use thiserror::Error;

/// The unified error type returned by all public pathmerge functions.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input is not well-formed markup.
    #[error("Failed to parse markup: {message}")]
    Parse { message: String },

    /// The markup parsed, but its document element is not `<svg>`.
    #[error("Missing <svg> root element{}", found_suffix(.found))]
    MissingRoot { found: Option<String> },

    /// Writing the output document failed.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] std::io::Error),

    /// An options file could not be read as JSON.
    #[error("Invalid options: {0}")]
    Config(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        ConvertError::Parse {
            message: message.into(),
        }
    }
}

fn found_suffix(found: &Option<String>) -> String {
    match found {
        Some(name) => format!(" (found <{}>)", name),
        None => " (document is empty)".to_string(),
    }
}
