use crate::InlineNode;

/// Flattens inline content into the plain text a reader would see.
pub fn to_plain_text(inlines: &[InlineNode]) -> String {
    let mut text = String::new();
    push_text(inlines, &mut text);
    text
}

fn push_text(inlines: &[InlineNode], text: &mut String) {
    for inline in inlines {
        match inline {
            InlineNode::Text { value } | InlineNode::Code { value } => text.push_str(value),
            InlineNode::Emphasis { children }
            | InlineNode::Strong { children }
            | InlineNode::Hyperlink { children, .. } => push_text(children, text),
            InlineNode::Image { alt, .. } => text.push_str(alt),
            InlineNode::LineBreak => text.push(' '),
        }
    }
}
