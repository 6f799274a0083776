// src/generator.rs
use log::debug;
use serde_json::Value;
use tocgen_core::{TocError, TocOptions, TocProcessor, TocReport};
use tocgen_idf::IRNode;

/// Replaces `[[TOC]]` markers in documents with generated outlines.
///
/// Created by [`crate::TocBuilder`]. A generator holds only validated
/// configuration, so one instance can process any number of documents.
#[derive(Debug, Clone)]
pub struct TocGenerator {
    processor: TocProcessor,
}

impl TocGenerator {
    pub(crate) fn new(processor: TocProcessor) -> Self {
        Self { processor }
    }

    pub fn options(&self) -> &TocOptions {
        self.processor.options()
    }

    /// Processes a document `Root` in place.
    pub fn process(&self, document: &mut IRNode) -> Result<TocReport, TocError> {
        self.processor.process_root(document)
    }

    /// Processes a bare sequence of top-level blocks in place.
    pub fn process_blocks(&self, blocks: &mut Vec<IRNode>) -> TocReport {
        self.processor.process(blocks)
    }

    /// Processes a document given as a JSON value and returns the result.
    pub fn process_value(&self, document: Value) -> Result<(Value, TocReport), TocError> {
        let mut root: IRNode = serde_json::from_value(document)?;
        let report = self.process(&mut root)?;
        Ok((serde_json::to_value(&root)?, report))
    }

    /// Processes a document given as JSON text and returns the rewritten JSON.
    pub fn process_json(&self, json: &str) -> Result<String, TocError> {
        let mut root: IRNode = serde_json::from_str(json)?;
        let report = self.process(&mut root)?;
        debug!("JSON document processed: {:?}", report);
        Ok(serde_json::to_string(&root)?)
    }
}
