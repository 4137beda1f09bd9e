//! Source convention detection

use crate::splitter::{CaseTransitionSplitter, DelimiterSplitter, Splitter};

/// Word separator of underscore-based conventions
pub const UNDERSCORE: char = '_';
/// Word separator of dash-based conventions
pub const DASH: char = '-';

/// Splitting strategy chosen for an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SourceStrategy {
    /// Words separated by `_`
    Underscore,
    /// Words separated by `-`
    Dash,
    /// Words separated by case transitions (camelCase, PascalCase)
    Uppercase,
}

impl SourceStrategy {
    /// Splitter implementing this strategy
    pub fn splitter(self) -> Box<dyn Splitter> {
        match self {
            SourceStrategy::Underscore => Box::new(DelimiterSplitter::new(UNDERSCORE)),
            SourceStrategy::Dash => Box::new(DelimiterSplitter::new(DASH)),
            SourceStrategy::Uppercase => Box::new(CaseTransitionSplitter),
        }
    }
}

/// Pick the splitting strategy for a raw input
///
/// Checks run in priority order: any `_`, then a bare all-caps word (which
/// the underscore splitter returns whole), then any `-`, and finally the
/// case-transition fallback.
pub fn analyse(input: &str) -> SourceStrategy {
    if input.contains(UNDERSCORE) || is_uppercase_word(input) {
        SourceStrategy::Underscore
    } else if input.contains(DASH) {
        SourceStrategy::Dash
    } else {
        SourceStrategy::Uppercase
    }
}

/// True iff `input` is non-empty and made only of upper-case letters
pub fn is_uppercase_word(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|ch| ch.is_alphabetic() && ch.is_uppercase())
}
