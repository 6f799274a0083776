pub mod fixtures;

use tocgen::{AnchorId, HeadingDepth, IRNode, InlineNode, NodeMetadata, to_plain_text};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A heading holding plain text.
pub fn h(level: u8, text: &str) -> IRNode {
    IRNode::heading(HeadingDepth::new(level).expect("valid test depth"), text)
}

/// A heading that already carries an explicit id.
pub fn h_with_id(level: u8, text: &str, id: &str) -> IRNode {
    IRNode::Heading {
        meta: NodeMetadata::with_id(id),
        level: HeadingDepth::new(level).expect("valid test depth"),
        children: vec![InlineNode::text(text)],
    }
}

pub fn p(text: &str) -> IRNode {
    IRNode::paragraph(text)
}

pub fn marker() -> IRNode {
    IRNode::paragraph("[[TOC]]")
}

/// The id stored on a heading node, if any.
pub fn heading_id(node: &IRNode) -> Option<&str> {
    match node {
        IRNode::Heading { meta, .. } => meta.id.as_ref().map(AnchorId::as_str),
        _ => None,
    }
}

/// Ids of every top-level heading, in order.
pub fn heading_ids(nodes: &[IRNode]) -> Vec<String> {
    nodes
        .iter()
        .filter(|n| matches!(n, IRNode::Heading { .. }))
        .map(|n| heading_id(n).unwrap_or("<none>").to_string())
        .collect()
}

/// Compact description of a rendered outline list.
///
/// Linked items print their link target without `#`, unlinked items their
/// text, placeholders `_`; nested lists follow in parentheses:
/// `intro(background) methods`.
pub fn list_shape(list: &IRNode) -> String {
    match list {
        IRNode::List { children, .. } => children.iter().map(item_shape).collect::<Vec<_>>().join(" "),
        other => panic!("expected a list, found {}", other.kind()),
    }
}

fn item_shape(item: &IRNode) -> String {
    let children = item.block_children().expect("list items hold blocks");
    let mut label = String::from("_");
    let mut nested = None;
    for child in children {
        match child {
            IRNode::Paragraph { children: inlines, .. } => {
                label = match inlines.as_slice() {
                    [InlineNode::Hyperlink { href, .. }] => href.trim_start_matches('#').to_string(),
                    other => to_plain_text(other),
                };
            }
            IRNode::List { .. } => nested = Some(list_shape(child)),
            other => panic!("unexpected {} inside list item", other.kind()),
        }
    }
    match nested {
        Some(nested) => format!("{}({})", label, nested),
        None => label,
    }
}

/// The classes on a node's metadata.
pub fn classes(node: &IRNode) -> Vec<String> {
    node.meta().map(|m| m.classes.clone()).unwrap_or_default()
}
