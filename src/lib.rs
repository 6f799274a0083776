//! # tocgen
//!
//! Generates tables of contents for in-memory document trees.
//!
//! Place a paragraph reading `[[TOC]]` anywhere in a document and
//! [`TocGenerator`] replaces it with a nested list linking to every
//! heading that follows it. Headings without an id receive a unique,
//! URL-safe slug first so the links resolve.
//!
//! ```ignore
//! let generator = TocBuilder::new().with_max_depth(4).build()?;
//! let report = generator.process(&mut document)?;
//! ```

pub mod builder;
pub mod generator;

// Re-export foundation crates
pub use tocgen_core as core;
pub use tocgen_idf as idf;
pub use tocgen_types as types;

pub use builder::TocBuilder;
pub use generator::TocGenerator;

// Re-export commonly used types
pub use tocgen_core::{
    DepthWindow, HeadingRecord, Outline, OutlineNode, SlugRegistry, TocError, TocOptions,
    TocReport, assign_slugs, build_hierarchy, collect_headings, render_outline,
};
pub use tocgen_idf::{IRNode, InlineNode, NodeMetadata, to_plain_text};
pub use tocgen_types::{AnchorId, HeadingDepth};
