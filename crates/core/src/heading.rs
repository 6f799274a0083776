//! Flat heading records read out of a document's top-level blocks.

use crate::options::DepthWindow;
use tocgen_idf::{IRNode, InlineNode};
use tocgen_types::{AnchorId, HeadingDepth};

/// One qualifying heading, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingRecord {
    /// Index of the heading among the root's children.
    pub position: usize,
    pub depth: HeadingDepth,
    /// Explicit or assigned anchor id.
    pub id: Option<AnchorId>,
    /// Metadata text to slug instead of `content`.
    pub slug_hint: Option<String>,
    pub content: Vec<InlineNode>,
}

impl HeadingRecord {
    pub fn new(position: usize, depth: HeadingDepth, content: Vec<InlineNode>) -> Self {
        Self { position, depth, id: None, slug_hint: None, content }
    }

    fn from_node(position: usize, node: &IRNode) -> Option<Self> {
        match node {
            IRNode::Heading { meta, level, children } => Some(Self {
                position,
                depth: *level,
                id: meta.id.clone(),
                slug_hint: meta.slug_hint.clone(),
                content: children.clone(),
            }),
            _ => None,
        }
    }
}

/// Collects the top-level headings at or after `start`, keeping only
/// those inside `window` when one is given.
pub fn collect_headings(nodes: &[IRNode], start: usize, window: Option<DepthWindow>) -> Vec<HeadingRecord> {
    nodes
        .iter()
        .enumerate()
        .skip(start)
        .filter_map(|(position, node)| HeadingRecord::from_node(position, node))
        .filter(|record| window.is_none_or(|w| w.contains(record.depth)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(level: u8) -> HeadingDepth {
        HeadingDepth::new(level).unwrap()
    }

    fn sample() -> Vec<IRNode> {
        vec![
            IRNode::heading(depth(1), "Title"),
            IRNode::paragraph("body"),
            IRNode::heading(depth(2), "Usage"),
            IRNode::heading(depth(5), "Deep"),
            IRNode::Block { meta: Default::default(), children: vec![IRNode::heading(depth(2), "Nested")] },
        ]
    }

    #[test]
    fn test_collects_top_level_headings_in_order() {
        let records = collect_headings(&sample(), 0, None);
        let positions: Vec<usize> = records.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 2, 3]);
        assert_eq!(records[1].depth, depth(2));
    }

    #[test]
    fn test_start_and_window_filter() {
        let window = DepthWindow { min: depth(1), max: depth(3) };
        let records = collect_headings(&sample(), 1, Some(window));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position, 2);
    }

    #[test]
    fn test_metadata_is_carried() {
        let mut nodes = sample();
        if let Some(meta) = nodes[0].meta_mut() {
            meta.id = Some(AnchorId::new("top"));
            meta.slug_hint = Some("Hint".into());
        }
        let records = collect_headings(&nodes, 0, None);
        assert_eq!(records[0].id, Some(AnchorId::new("top")));
        assert_eq!(records[0].slug_hint.as_deref(), Some("Hint"));
    }
}
