// src/builder.rs
use crate::generator::TocGenerator;
use tocgen_core::options::{DEFAULT_CLASS_NAME, DEFAULT_MAX_DEPTH, DEFAULT_MIN_DEPTH};
use tocgen_core::{TocError, TocOptions, TocProcessor};
use tocgen_types::HeadingDepth;

/// A builder for creating a `TocGenerator`.
///
/// Depths are accepted as raw levels and checked in [`TocBuilder::build`],
/// which is the only place configuration can fail.
#[derive(Debug, Clone)]
pub struct TocBuilder {
    min_depth: u8,
    max_depth: u8,
    class_name: String,
}

impl Default for TocBuilder {
    fn default() -> Self {
        Self {
            min_depth: DEFAULT_MIN_DEPTH.get(),
            max_depth: DEFAULT_MAX_DEPTH.get(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl TocBuilder {
    /// Creates a new `TocBuilder` with default settings (depths 1 to 3).
    pub fn new() -> Self { Default::default() }

    /// Shallowest heading level to list.
    pub fn with_min_depth(mut self, level: u8) -> Self { self.min_depth = level; self }

    /// Deepest heading level to list.
    pub fn with_max_depth(mut self, level: u8) -> Self { self.max_depth = level; self }

    /// Class attached to the root list of each generated table of contents.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self { self.class_name = class_name.into(); self }

    /// Replaces all settings with already-parsed options.
    pub fn with_options(mut self, options: TocOptions) -> Self {
        self.min_depth = options.min_depth.get();
        self.max_depth = options.max_depth.get();
        self.class_name = options.class_name;
        self
    }

    /// Configures the builder from a JSON options object such as
    /// `{"minDepth": 2, "className": "toc"}`. Missing keys keep their defaults.
    pub fn with_options_json(self, json: &str) -> Result<Self, TocError> {
        let options = TocOptions::from_json(json)?;
        Ok(self.with_options(options))
    }

    /// Consumes the builder, validating the configuration.
    pub fn build(self) -> Result<TocGenerator, TocError> {
        let options = TocOptions {
            min_depth: HeadingDepth::try_from(self.min_depth)?,
            max_depth: HeadingDepth::try_from(self.max_depth)?,
            class_name: self.class_name,
        };
        log::debug!(
            "Building generator for depths {}..={} with class '{}'.",
            options.min_depth, options.max_depth, options.class_name
        );
        Ok(TocGenerator::new(TocProcessor::new(options)?))
    }
}
