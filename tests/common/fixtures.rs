use super::{h, marker, p};
use serde_json::{Value, json};
use tocgen::IRNode;

/// Marker followed by a small two-level document.
pub fn basic() -> Vec<IRNode> {
    vec![
        h(1, "Guide"),
        marker(),
        h(1, "Intro"),
        p("Some words."),
        h(2, "Background"),
        h(1, "Methods"),
        h(2, "Data"),
        h(3, "Sources"),
    ]
}

/// Repeated heading texts.
pub fn duplicate_headings() -> Vec<IRNode> {
    vec![
        marker(),
        h(1, "Notes"),
        h(2, "Example"),
        h(1, "Notes"),
        h(2, "Example"),
        h(2, "Example"),
    ]
}

/// Headings deeper than the default window.
pub fn omitted_headings() -> Vec<IRNode> {
    vec![
        marker(),
        h(1, "Top"),
        h(2, "Second"),
        h(3, "Third"),
        h(4, "Fourth"),
        h(5, "Fifth"),
    ]
}

/// Two markers with different heading tails.
pub fn multiple_tocs() -> Vec<IRNode> {
    vec![
        marker(),
        h(1, "Part One"),
        h(2, "Chapter"),
        IRNode::paragraph("[[ toc ]]"),
        h(2, "Appendix"),
        h(3, "Tables"),
    ]
}

/// The basic document in its JSON form.
pub fn basic_json() -> Value {
    json!({
        "type": "root",
        "children": [
            { "type": "paragraph", "children": [ { "type": "text", "value": "[[toc]]" } ] },
            { "type": "heading", "level": 1, "children": [ { "type": "text", "value": "Intro" } ] },
            { "type": "heading", "level": 2, "children": [
                { "type": "text", "value": "Back" },
                { "type": "emphasis", "children": [ { "type": "text", "value": "ground" } ] }
            ] },
            { "type": "heading", "level": 1, "meta": { "id": "the-methods" },
              "children": [ { "type": "text", "value": "Methods" } ] }
        ]
    })
}
