//! Configuration for table-of-contents generation.

use crate::error::TocError;
use serde::{Deserialize, Serialize};
use tocgen_types::HeadingDepth;

pub const DEFAULT_MIN_DEPTH: HeadingDepth = HeadingDepth::MIN;
pub const DEFAULT_MAX_DEPTH: HeadingDepth = match HeadingDepth::new(3) {
    Some(depth) => depth,
    None => HeadingDepth::MAX,
};
pub const DEFAULT_CLASS_NAME: &str = "table-of-contents";

/// The inclusive range of heading depths listed in an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthWindow {
    pub min: HeadingDepth,
    pub max: HeadingDepth,
}

impl DepthWindow {
    pub fn contains(&self, depth: HeadingDepth) -> bool {
        self.min <= depth && depth <= self.max
    }
}

/// User-facing generation options.
///
/// Missing fields fall back to their defaults when deserialized, so
/// `{"maxDepth": 4}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TocOptions {
    /// Shallowest heading depth to include.
    pub min_depth: HeadingDepth,
    /// Deepest heading depth to include.
    pub max_depth: HeadingDepth,
    /// Class attached to the root list of every generated outline.
    pub class_name: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            min_depth: DEFAULT_MIN_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl TocOptions {
    /// Parses options from a JSON object, filling gaps with defaults.
    /// The result is not validated; see [`TocOptions::validate`].
    pub fn from_json(json: &str) -> Result<Self, TocError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<(), TocError> {
        if self.min_depth > self.max_depth {
            return Err(TocError::InvalidDepthRange {
                min_depth: self.min_depth,
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }

    pub fn window(&self) -> DepthWindow {
        DepthWindow { min: self.min_depth, max: self.max_depth }
    }
}
