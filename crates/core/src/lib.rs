//! # tocgen-core
//!
//! Table-of-contents generation over an in-memory document tree:
//! - **slug**: unique, URL-safe anchor ids for headings
//! - **hierarchy**: nested outline reconstruction from flat heading depths
//! - **render**: outline to document list nodes
//! - **marker**: `[[TOC]]` placement marker lookup
//! - **processor**: ties the pieces together for a whole document
//!
//! ## Design Principle
//!
//! This crate performs no I/O and keeps no global state. Each document
//! build allocates its own slug registry, so independent documents can be
//! processed concurrently without interfering.

pub use tocgen_idf as idf;
pub use tocgen_types as types;

pub mod error;
pub mod heading;
pub mod hierarchy;
pub mod marker;
pub mod options;
pub mod processor;
pub mod render;
pub mod slug;

pub use error::TocError;
pub use heading::{HeadingRecord, collect_headings};
pub use hierarchy::{Outline, OutlineNode, build_hierarchy};
pub use idf::{IRNode, InlineNode, NodeMetadata};
pub use marker::{find_toc_marker, is_toc_marker};
pub use options::{DepthWindow, TocOptions};
pub use processor::{TocProcessor, TocReport};
pub use render::render_outline;
pub use slug::{SlugRegistry, assign_slugs};
pub use types::{AnchorId, HeadingDepth};
