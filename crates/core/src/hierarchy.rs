//! Rebuilds a nested outline from a flat, depth-tagged heading sequence.
//!
//! The shallowest depth present becomes the root level. When the depth
//! jumps by more than one level, empty placeholder nodes are synthesized so
//! that every node's children sit exactly one level below it.

use crate::heading::HeadingRecord;
use log::trace;
use tocgen_idf::InlineNode;
use tocgen_types::{AnchorId, HeadingDepth};

/// A node in the reconstructed outline.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineNode {
    /// A real heading, linked when it has an id.
    Entry {
        depth: HeadingDepth,
        id: Option<AnchorId>,
        content: Vec<InlineNode>,
        children: Vec<OutlineNode>,
    },
    /// A synthetic spacer holding deeper nodes at the right nesting level.
    Placeholder {
        depth: HeadingDepth,
        children: Vec<OutlineNode>,
    },
}

impl OutlineNode {
    pub fn placeholder(depth: HeadingDepth) -> Self {
        OutlineNode::Placeholder { depth, children: Vec::new() }
    }

    pub fn depth(&self) -> HeadingDepth {
        match self {
            OutlineNode::Entry { depth, .. } | OutlineNode::Placeholder { depth, .. } => *depth,
        }
    }

    pub fn id(&self) -> Option<&AnchorId> {
        match self {
            OutlineNode::Entry { id, .. } => id.as_ref(),
            OutlineNode::Placeholder { .. } => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, OutlineNode::Placeholder { .. })
    }

    pub fn children(&self) -> &[OutlineNode] {
        match self {
            OutlineNode::Entry { children, .. } | OutlineNode::Placeholder { children, .. } => children,
        }
    }

    fn children_mut(&mut self) -> &mut Vec<OutlineNode> {
        match self {
            OutlineNode::Entry { children, .. } | OutlineNode::Placeholder { children, .. } => children,
        }
    }
}

impl From<HeadingRecord> for OutlineNode {
    fn from(record: HeadingRecord) -> Self {
        OutlineNode::Entry {
            depth: record.depth,
            id: record.id,
            content: record.content,
            children: Vec::new(),
        }
    }
}

/// The top level of a reconstructed outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Depth of every root node: the shallowest depth in the input.
    pub min_depth: HeadingDepth,
    pub roots: Vec<OutlineNode>,
}

impl Outline {
    /// Visits every node depth-first, in document order.
    pub fn walk(&self) -> impl Iterator<Item = &OutlineNode> {
        let mut stack: Vec<&OutlineNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev());
            Some(node)
        })
    }
}

/// Builds the outline for `records`, or `None` when there are none.
pub fn build_hierarchy(records: Vec<HeadingRecord>) -> Option<Outline> {
    let min_depth = records.iter().map(|record| record.depth).min()?;
    let mut roots: Vec<OutlineNode> = Vec::with_capacity(records.len());

    for record in records {
        let node = OutlineNode::from(record);
        if node.depth() == min_depth {
            roots.push(node);
        } else if let Some(last) = roots.last_mut() {
            attach_leaf(last, node);
        } else {
            roots.push(wrap_to_depth(node, min_depth));
        }
    }

    Some(Outline { min_depth, roots })
}

/// Descends along the most recent child of `target` until `node` fits one
/// level below the cursor, creating placeholders where a level is missing.
fn attach_leaf(target: &mut OutlineNode, node: OutlineNode) {
    let mut cursor = target;
    loop {
        let depth = cursor.depth();
        // Every child sits exactly one level below its parent, so the cursor
        // reaches `node.depth() - 1` before running out of levels.
        if node.depth().is_child_of(depth) {
            cursor.children_mut().push(node);
            return;
        }

        let children = cursor.children_mut();
        if children.is_empty() {
            trace!("Synthesizing placeholder at depth {}", depth.deeper());
            children.push(OutlineNode::placeholder(depth.deeper()));
        }
        let last = children.len() - 1;
        cursor = &mut children[last];
    }
}

/// Wraps `node` in placeholder ancestors until the outermost one sits at `depth`.
fn wrap_to_depth(mut node: OutlineNode, depth: HeadingDepth) -> OutlineNode {
    while node.depth() > depth {
        node = OutlineNode::Placeholder { depth: node.depth().shallower(), children: vec![node] };
    }
    node
}
