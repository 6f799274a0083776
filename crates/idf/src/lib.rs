//! Intermediate Document Format (IDF)
//! This module defines the in-memory representation of a host document's
//! structure and content. Table-of-contents generation reads headings out of
//! it and splices rendered outlines back into it.

use serde::{Deserialize, Serialize};
use tocgen_types::{AnchorId, HeadingDepth};

mod text;

pub use text::to_plain_text;

// --- Shared Types ---

/// A string type for the document.
pub type TextStr = String;

/// A common metadata structure for all block-level `IRNode`s.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeMetadata {
    /// Explicit anchor id. Headings without one receive a generated slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AnchorId>,
    /// Text to derive the slug from instead of the heading's own content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug_hint: Option<TextStr>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<TextStr>,
}

impl NodeMetadata {
    pub fn with_id(id: impl Into<AnchorId>) -> Self {
        Self { id: Some(id.into()), ..Default::default() }
    }

    pub fn with_class(class_name: impl Into<TextStr>) -> Self {
        Self { classes: vec![class_name.into()], ..Default::default() }
    }
}

// --- Main Node Enums ---

/// Represents a block-level element in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum IRNode {
    /// The root of a document, containing other block nodes.
    Root { children: Vec<IRNode> },
    /// A generic block container.
    Block {
        #[serde(default)]
        meta: NodeMetadata,
        children: Vec<IRNode>,
    },
    /// A paragraph, containing only inline content.
    Paragraph {
        #[serde(default)]
        meta: NodeMetadata,
        children: Vec<InlineNode>,
    },
    /// A heading, with a level and inline content.
    Heading {
        #[serde(default)]
        meta: NodeMetadata,
        level: HeadingDepth,
        children: Vec<InlineNode>,
    },
    /// An ordered (`start` set) or unordered list.
    List {
        #[serde(default)]
        meta: NodeMetadata,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<usize>,
        children: Vec<IRNode>,
    },
    /// An item within a list.
    ListItem {
        #[serde(default)]
        meta: NodeMetadata,
        children: Vec<IRNode>,
    },
    /// An image.
    Image {
        #[serde(default)]
        meta: NodeMetadata,
        src: TextStr,
    },
    /// A horizontal rule.
    ThematicBreak,
}

impl IRNode {
    /// Wraps top-level blocks into a document root.
    pub fn root(children: Vec<IRNode>) -> Self {
        IRNode::Root { children }
    }

    /// A heading holding a single run of text.
    pub fn heading(level: HeadingDepth, text: impl Into<TextStr>) -> Self {
        IRNode::Heading {
            meta: NodeMetadata::default(),
            level,
            children: vec![InlineNode::text(text)],
        }
    }

    /// A paragraph holding a single run of text.
    pub fn paragraph(text: impl Into<TextStr>) -> Self {
        IRNode::Paragraph {
            meta: NodeMetadata::default(),
            children: vec![InlineNode::text(text)],
        }
    }

    /// Returns a reference to the metadata if the node type supports it.
    pub fn meta(&self) -> Option<&NodeMetadata> {
        match self {
            IRNode::Block { meta, .. } => Some(meta),
            IRNode::Paragraph { meta, .. } => Some(meta),
            IRNode::Heading { meta, .. } => Some(meta),
            IRNode::List { meta, .. } => Some(meta),
            IRNode::ListItem { meta, .. } => Some(meta),
            IRNode::Image { meta, .. } => Some(meta),
            IRNode::Root { .. } | IRNode::ThematicBreak => None,
        }
    }

    /// Returns a mutable reference to the metadata if the node type supports it.
    pub fn meta_mut(&mut self) -> Option<&mut NodeMetadata> {
        match self {
            IRNode::Block { meta, .. } => Some(meta),
            IRNode::Paragraph { meta, .. } => Some(meta),
            IRNode::Heading { meta, .. } => Some(meta),
            IRNode::List { meta, .. } => Some(meta),
            IRNode::ListItem { meta, .. } => Some(meta),
            IRNode::Image { meta, .. } => Some(meta),
            IRNode::Root { .. } | IRNode::ThematicBreak => None,
        }
    }

    /// The block children of container nodes.
    pub fn block_children(&self) -> Option<&[IRNode]> {
        match self {
            IRNode::Root { children }
            | IRNode::Block { children, .. }
            | IRNode::List { children, .. }
            | IRNode::ListItem { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Returns a string identifier for the node type, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            IRNode::Root { .. } => "root",
            IRNode::Block { .. } => "block",
            IRNode::Paragraph { .. } => "paragraph",
            IRNode::Heading { .. } => "heading",
            IRNode::List { .. } => "list",
            IRNode::ListItem { .. } => "list-item",
            IRNode::Image { .. } => "image",
            IRNode::ThematicBreak => "thematic-break",
        }
    }
}

/// Represents an inline-level element within a block like a `Paragraph`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineNode {
    /// A run of plain text.
    Text { value: TextStr },
    /// Inline code.
    Code { value: TextStr },
    Emphasis { children: Vec<InlineNode> },
    Strong { children: Vec<InlineNode> },
    /// A hyperlink `<a>`.
    Hyperlink { href: TextStr, children: Vec<InlineNode> },
    /// An inline image.
    Image {
        src: TextStr,
        #[serde(default)]
        alt: TextStr,
    },
    /// A soft line break.
    LineBreak,
}

impl InlineNode {
    pub fn text(value: impl Into<TextStr>) -> Self {
        InlineNode::Text { value: value.into() }
    }
}
