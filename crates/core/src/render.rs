//! Converts an [`Outline`] into document list nodes.

use crate::hierarchy::{Outline, OutlineNode};
use tocgen_idf::{IRNode, InlineNode, NodeMetadata};

/// Renders `outline` as a nested unordered list whose root carries `class_name`.
///
/// Linked entries become `ListItem[Paragraph[Hyperlink]]`, unlinked entries
/// keep their bare content, and placeholders become items that hold only
/// their nested list.
pub fn render_outline(outline: &Outline, class_name: &str) -> IRNode {
    let meta = if class_name.is_empty() {
        NodeMetadata::default()
    } else {
        NodeMetadata::with_class(class_name)
    };
    render_list(&outline.roots, meta)
}

fn render_list(nodes: &[OutlineNode], meta: NodeMetadata) -> IRNode {
    IRNode::List {
        meta,
        start: None,
        children: nodes.iter().map(render_item).collect(),
    }
}

fn render_item(node: &OutlineNode) -> IRNode {
    let mut children = Vec::with_capacity(2);
    if let OutlineNode::Entry { id, content, .. } = node {
        let inlines = match id {
            Some(id) => vec![InlineNode::Hyperlink { href: id.href(), children: content.clone() }],
            None => content.clone(),
        };
        children.push(IRNode::Paragraph { meta: NodeMetadata::default(), children: inlines });
    }
    if !node.children().is_empty() {
        children.push(render_list(node.children(), NodeMetadata::default()));
    }
    IRNode::ListItem { meta: NodeMetadata::default(), children }
}
