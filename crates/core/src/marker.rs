//! Locates `[[TOC]]` placement markers in a document.
//!
//! A marker is a paragraph whose only child is a text run containing
//! `[[TOC]]`, matched case-insensitively and with optional whitespace
//! inside the brackets (`[[ toc ]]`).

use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::multispace0;
use nom::sequence::{delimited, pair};
use nom::{IResult, Parser};
use tocgen_idf::{IRNode, InlineNode};

fn toc_marker(input: &str) -> IResult<&str, &str> {
    delimited(
        pair(tag("[["), multispace0),
        tag_no_case("toc"),
        pair(multispace0, tag("]]")),
    )
    .parse(input)
}

/// True when `text` contains a marker anywhere.
pub fn is_toc_marker(text: &str) -> bool {
    let text = text.trim();
    text.match_indices("[[").any(|(at, _)| toc_marker(&text[at..]).is_ok())
}

fn is_marker_paragraph(node: &IRNode) -> bool {
    match node {
        IRNode::Paragraph { children, .. } => match children.as_slice() {
            [InlineNode::Text { value }] => is_toc_marker(value),
            _ => false,
        },
        _ => false,
    }
}

/// Index of the first marker paragraph at or after `start`.
pub fn find_toc_marker(nodes: &[IRNode], start: usize) -> Option<usize> {
    nodes
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, node)| is_marker_paragraph(node))
        .map(|(index, _)| index)
}
