//! Naming conventions and their formatting rules

use crate::detector::SourceStrategy;
use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

/// Letter-case transform applied to every word before joining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    /// Whole word lower-case
    Lower,
    /// Whole word upper-case
    Upper,
    /// First character upper-case, remainder lower-case
    Title,
}

/// How words are glued back together for one convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlueRules {
    /// Separator placed between words (may be empty)
    pub delimiter: &'static str,
    /// Case transform applied to each word
    pub letter_case: LetterCase,
    /// Force the first character of the result to lower-case
    pub lower_first: bool,
}

impl GlueRules {
    /// Create a new rule set
    pub const fn new(delimiter: &'static str, letter_case: LetterCase, lower_first: bool) -> Self {
        Self {
            delimiter,
            letter_case,
            lower_first,
        }
    }
}

/// Supported naming conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum NamingConvention {
    /// `Ada_Case`
    Ada,
    /// `camelCase`
    Camel,
    /// `COBOL-CASE`
    Cobol,
    /// `kebab-case`
    Kebab,
    /// `MACRO_CASE`
    Macro,
    /// `PascalCase`
    Pascal,
    /// `snake_case`
    Snake,
    /// `Train-Case`
    Train,
}

impl NamingConvention {
    /// Every convention, in alphabetical order
    pub const ALL: [NamingConvention; 8] = [
        NamingConvention::Ada,
        NamingConvention::Camel,
        NamingConvention::Cobol,
        NamingConvention::Kebab,
        NamingConvention::Macro,
        NamingConvention::Pascal,
        NamingConvention::Snake,
        NamingConvention::Train,
    ];

    /// Formatting rules for this convention
    pub const fn rules(self) -> GlueRules {
        match self {
            NamingConvention::Ada => GlueRules::new("_", LetterCase::Title, false),
            NamingConvention::Camel => GlueRules::new("", LetterCase::Title, true),
            NamingConvention::Cobol => GlueRules::new("-", LetterCase::Upper, false),
            NamingConvention::Kebab => GlueRules::new("-", LetterCase::Lower, false),
            NamingConvention::Macro => GlueRules::new("_", LetterCase::Upper, false),
            NamingConvention::Pascal => GlueRules::new("", LetterCase::Title, false),
            NamingConvention::Snake => GlueRules::new("_", LetterCase::Lower, false),
            NamingConvention::Train => GlueRules::new("-", LetterCase::Title, false),
        }
    }

    /// Strategy that splits text already written in this convention
    pub const fn source_strategy(self) -> SourceStrategy {
        match self {
            NamingConvention::Ada | NamingConvention::Macro | NamingConvention::Snake => {
                SourceStrategy::Underscore
            }
            NamingConvention::Cobol | NamingConvention::Kebab | NamingConvention::Train => {
                SourceStrategy::Dash
            }
            NamingConvention::Camel | NamingConvention::Pascal => SourceStrategy::Uppercase,
        }
    }

    /// Lower-case tag
    pub const fn name(self) -> &'static str {
        match self {
            NamingConvention::Ada => "ada",
            NamingConvention::Camel => "camel",
            NamingConvention::Cobol => "cobol",
            NamingConvention::Kebab => "kebab",
            NamingConvention::Macro => "macro",
            NamingConvention::Pascal => "pascal",
            NamingConvention::Snake => "snake",
            NamingConvention::Train => "train",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamingConvention {
    type Err = EngineError;

    /// Accepts `snake`, `Snake`, `snake_case` and `snake-case` style names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let base = lowered
            .strip_suffix("_case")
            .or_else(|| lowered.strip_suffix("-case"))
            .unwrap_or(lowered.as_str());

        NamingConvention::ALL
            .into_iter()
            .find(|convention| convention.name() == base)
            .ok_or_else(|| EngineError::UnknownConvention {
                name: s.to_string(),
            })
    }
}
