// ABOUTME: Fluent builder for Enhancer instances.
// ABOUTME: Each setter overrides one section of the EnhancerConfig.

use qis_grades::{ColumnLayout, Palette, Vocabulary};

use crate::config::{EnhancerConfig, Selectors};
use crate::enhancer::Enhancer;

/// Builder for constructing Enhancer instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct EnhancerBuilder {
    config: EnhancerConfig,
}

impl EnhancerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EnhancerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn layout(mut self, layout: ColumnLayout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.config.vocabulary = vocabulary;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    pub fn selectors(mut self, selectors: Selectors) -> Self {
        self.config.selectors = selectors;
        self
    }

    /// Pin the calendar year used for the special-attempt check.
    pub fn year(mut self, year: i32) -> Self {
        self.config.year = Some(year);
        self
    }

    pub fn build(self) -> Enhancer {
        Enhancer::new(self.config)
    }
}
