//! Public API for converting identifiers between naming conventions
//!
//! A [`Convert`] session detects how its input is written once, keeps the
//! resulting words, and renders them in any number of target conventions.
//!
//! ```
//! use recase_api::Convert;
//!
//! let name = Convert::new("deep-space-nine");
//! assert_eq!(name.to_pascal(), "DeepSpaceNine");
//! assert_eq!(name.to_macro(), "DEEP_SPACE_NINE");
//! assert_eq!(name.to_string(), "deepSpaceNine");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use recase_engine::{analyse, glue_with, split};
use std::fmt;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{ConventionOutput, Input, Report};
pub use error::ApiError;
pub use recase_engine::{
    EngineError, GlueRules, LetterCase, NamingConvention, SourceStrategy, WordSequence,
};

/// One conversion session over a single input string
///
/// The input is split into words on construction; every `to_*` call only
/// glues the stored words back together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convert {
    input: String,
    strategy: SourceStrategy,
    words: WordSequence,
}

impl Convert {
    /// Create a session, detecting the source convention
    pub fn new(input: impl Into<String>) -> Self {
        Self::with_config(input, Config::default())
    }

    /// Create a session with custom configuration
    pub fn with_config(input: impl Into<String>, config: Config) -> Self {
        let input = input.into();
        let strategy = match config.source() {
            Some(convention) => convention.source_strategy(),
            None => analyse(&input),
        };
        let words = split(strategy, &input);

        tracing::debug!(
            input = %input,
            ?strategy,
            forced = config.source().is_some(),
            words = words.len(),
            "detected naming convention"
        );

        Self {
            input,
            strategy,
            words,
        }
    }

    /// Create a session from an input that must be a string
    pub fn from_input(input: impl Into<Input>) -> Result<Self> {
        let text = input.into().read_text()?;
        Ok(Self::new(text))
    }

    /// Re-read the same input as written in `convention`
    pub fn read_as(&self, convention: NamingConvention) -> Self {
        Self::with_config(self.input.clone(), Config::from_convention(convention))
    }

    /// Original input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Strategy used to split the input
    pub fn strategy(&self) -> SourceStrategy {
        self.strategy
    }

    /// Words found in the input
    pub fn words(&self) -> &WordSequence {
        &self.words
    }

    /// Convert to any convention
    pub fn to(&self, convention: NamingConvention) -> String {
        self.to_rules(convention.rules())
    }

    /// Glue the words with custom rules
    pub fn to_rules(&self, rules: GlueRules) -> String {
        glue_with(self.words.as_slice(), rules)
    }

    /// Convert to `Ada_Case`
    pub fn to_ada(&self) -> String {
        self.to(NamingConvention::Ada)
    }

    /// Convert to `camelCase`
    pub fn to_camel(&self) -> String {
        self.to(NamingConvention::Camel)
    }

    /// Convert to `COBOL-CASE`
    pub fn to_cobol(&self) -> String {
        self.to(NamingConvention::Cobol)
    }

    /// Convert to `kebab-case`
    pub fn to_kebab(&self) -> String {
        self.to(NamingConvention::Kebab)
    }

    /// Convert to `MACRO_CASE`
    pub fn to_macro(&self) -> String {
        self.to(NamingConvention::Macro)
    }

    /// Convert to `PascalCase`
    pub fn to_pascal(&self) -> String {
        self.to(NamingConvention::Pascal)
    }

    /// Convert to `snake_case`
    pub fn to_snake(&self) -> String {
        self.to(NamingConvention::Snake)
    }

    /// Convert to `Train-Case`
    pub fn to_train(&self) -> String {
        self.to(NamingConvention::Train)
    }

    /// Convert to every convention
    pub fn to_all(&self) -> Vec<ConventionOutput> {
        NamingConvention::ALL
            .into_iter()
            .map(|convention| ConventionOutput {
                convention,
                output: self.to(convention),
            })
            .collect()
    }

    /// Summarise the session for inspection
    pub fn report(&self) -> Report {
        Report {
            input: self.input.clone(),
            strategy: self.strategy,
            words: self.words.clone(),
            conversions: self.to_all(),
        }
    }
}

impl fmt::Display for Convert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_camel())
    }
}

impl From<&str> for Convert {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<String> for Convert {
    fn from(input: String) -> Self {
        Self::new(input)
    }
}

// Convenience functions

/// Convert `text` to `convention`
pub fn convert(text: &str, convention: NamingConvention) -> String {
    Convert::new(text).to(convention)
}

/// Convert `text` to a convention given by name, e.g. `"snake"` or `"Train-Case"`
pub fn convert_to(text: &str, convention: &str) -> Result<String> {
    let convention: NamingConvention = convention.parse()?;
    Ok(convert(text, convention))
}

/// Convert `text` to every convention
pub fn convert_all(text: &str) -> Vec<ConventionOutput> {
    Convert::new(text).to_all()
}
