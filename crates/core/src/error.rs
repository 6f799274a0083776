// src/error.rs
//! Defines the error type for table-of-contents generation.

use thiserror::Error;
use tocgen_types::{DepthError, HeadingDepth};

/// The main error enum for all high-level operations within the generator.
///
/// Only configuration can fail: empty documents, empty headings and
/// out-of-window depths are all valid input.
#[derive(Error, Debug)]
pub enum TocError {
    #[error("Configuration error: min_depth {min_depth} must not be greater than max_depth {max_depth}")]
    InvalidDepthRange {
        min_depth: HeadingDepth,
        max_depth: HeadingDepth,
    },
    #[error("Configuration error: {0}")]
    InvalidDepth(#[from] DepthError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document error: {0}")]
    Document(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_range_message_names_both_values() {
        let err = TocError::InvalidDepthRange {
            min_depth: HeadingDepth::new(4).unwrap(),
            max_depth: HeadingDepth::new(3).unwrap(),
        };
        let message = err.to_string();
        assert!(message.contains("min_depth 4"));
        assert!(message.contains("max_depth 3"));
    }

    #[test]
    fn test_depth_error_converts() {
        let err: TocError = DepthError(0).into();
        assert!(matches!(err, TocError::InvalidDepth(DepthError(0))));
    }
}
