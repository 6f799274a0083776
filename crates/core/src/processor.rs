// src/processor.rs
//! Finds every placement marker in a document and replaces it with a
//! generated table of contents.

use crate::error::TocError;
use crate::heading::collect_headings;
use crate::hierarchy::build_hierarchy;
use crate::marker::find_toc_marker;
use crate::options::TocOptions;
use crate::render::render_outline;
use crate::slug::assign_slugs;
use log::{debug, info, warn};
use tocgen_idf::IRNode;

/// What a single `process` call changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocReport {
    /// Markers replaced by a generated list.
    pub tables_inserted: usize,
    /// Markers dropped because no in-window heading followed them.
    pub markers_removed: usize,
    /// Headings that received a generated id.
    pub ids_assigned: usize,
}

/// Applies validated [`TocOptions`] to documents.
#[derive(Debug, Clone)]
pub struct TocProcessor {
    options: TocOptions,
}

impl TocProcessor {
    /// Validates `options` up front so no document is touched with a bad configuration.
    pub fn new(options: TocOptions) -> Result<Self, TocError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &TocOptions {
        &self.options
    }

    /// Processes a `Root` node in place.
    pub fn process_root(&self, root: &mut IRNode) -> Result<TocReport, TocError> {
        match root {
            IRNode::Root { children } => Ok(self.process(children)),
            other => Err(TocError::Document(format!("expected a root node, found '{}'", other.kind()))),
        }
    }

    /// Processes a document's top-level blocks in place.
    ///
    /// Documents without a marker are left untouched. Otherwise every
    /// heading in the document gets a unique id first, then each marker is
    /// replaced by the outline of the in-window headings that follow it.
    pub fn process(&self, nodes: &mut Vec<IRNode>) -> TocReport {
        let mut report = TocReport::default();
        let Some(first_marker) = find_toc_marker(nodes, 0) else {
            debug!("No table-of-contents marker found; document left unchanged.");
            return report;
        };

        let mut headings = collect_headings(nodes, 0, None);
        report.ids_assigned = headings.iter().filter(|h| h.id.is_none()).count();
        assign_slugs(&mut headings, nodes);

        let window = self.options.window();
        let mut cursor = first_marker;
        while let Some(index) = find_toc_marker(nodes, cursor) {
            let records = collect_headings(nodes, index + 1, Some(window));
            debug!("Marker at index {} covers {} heading(s).", index, records.len());

            match build_hierarchy(records) {
                Some(outline) => {
                    nodes[index] = render_outline(&outline, &self.options.class_name);
                    report.tables_inserted += 1;
                    cursor = index + 1;
                }
                None => {
                    warn!("No headings follow the marker at index {}; removing it.", index);
                    nodes.remove(index);
                    report.markers_removed += 1;
                    cursor = index;
                }
            }
        }

        info!(
            "Generated {} table(s) of contents, removed {} empty marker(s), assigned {} id(s).",
            report.tables_inserted, report.markers_removed, report.ids_assigned
        );
        report
    }
}
