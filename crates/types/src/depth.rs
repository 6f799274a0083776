//! Bounded heading depth.
//!
//! Headings nest between level 1 (`<h1>`) and level 6 (`<h6>`). Every depth
//! flowing through the outline builder is a `HeadingDepth`, so an
//! out-of-range level is rejected once, at the edge, and never again.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raised when a raw level falls outside `1..=6`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("heading depth {0} is outside the valid range 1..=6")]
pub struct DepthError(pub u8);

/// A heading nesting depth in the range `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingDepth(u8);

impl HeadingDepth {
    pub const MIN: HeadingDepth = HeadingDepth(1);
    pub const MAX: HeadingDepth = HeadingDepth(6);

    /// Creates a depth, returning `None` for levels outside `1..=6`.
    pub const fn new(level: u8) -> Option<Self> {
        if level >= 1 && level <= 6 {
            Some(Self(level))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// One level deeper, clamped at `MAX`.
    pub const fn deeper(self) -> Self {
        if self.0 >= 6 { self } else { Self(self.0 + 1) }
    }

    /// One level shallower, clamped at `MIN`.
    pub const fn shallower(self) -> Self {
        if self.0 <= 1 { self } else { Self(self.0 - 1) }
    }

    /// True when `self` sits exactly one level below `parent`.
    pub const fn is_child_of(self, parent: HeadingDepth) -> bool {
        self.0 == parent.0 + 1
    }
}

impl Default for HeadingDepth {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for HeadingDepth {
    type Error = DepthError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(DepthError(level))
    }
}

impl From<HeadingDepth> for u8 {
    fn from(depth: HeadingDepth) -> Self {
        depth.0
    }
}

impl fmt::Display for HeadingDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
