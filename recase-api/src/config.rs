//! Session configuration

use crate::error::Result;
use recase_engine::NamingConvention;

/// How a session reads its input
///
/// By default the source convention is detected from the input itself. A
/// forced source convention skips detection and splits with the strategy
/// that reads that convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    source: Option<NamingConvention>,
}

impl Config {
    /// Detect the source convention from the input
    pub fn auto() -> Self {
        Self::default()
    }

    /// Read the input as written in `convention`
    pub fn from_convention(convention: NamingConvention) -> Self {
        Self {
            source: Some(convention),
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Forced source convention, if any
    pub fn source(&self) -> Option<NamingConvention> {
        self.source
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Force the source convention by name, e.g. `"kebab"` or `"snake_case"`
    pub fn source(mut self, name: &str) -> Result<Self> {
        self.config.source = Some(name.parse()?);
        Ok(self)
    }

    /// Force the source convention
    pub fn source_convention(mut self, convention: NamingConvention) -> Self {
        self.config.source = Some(convention);
        self
    }

    /// Go back to detecting the source convention
    pub fn auto_detect(mut self) -> Self {
        self.config.source = None;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
