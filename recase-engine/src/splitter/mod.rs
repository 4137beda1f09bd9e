//! Splitting strategies for breaking identifiers into words

use crate::{detector::SourceStrategy, words::WordSequence};

pub mod case_transition;
pub mod delimited;

// Re-export splitters
pub use case_transition::{is_word_boundary, split_uppercase, CaseTransitionSplitter};
pub use delimited::{split_delimited, DelimiterSplitter};

/// Pluggable word splitter
pub trait Splitter: Send + Sync {
    /// Break `input` into words without altering any character
    fn split(&self, input: &str) -> WordSequence;

    /// Get a human-readable name for this splitter
    fn name(&self) -> &'static str;
}

/// Split `input` with the splitter of the given strategy
pub fn split(strategy: SourceStrategy, input: &str) -> WordSequence {
    let words = strategy.splitter().split(input);
    tracing::trace!(?strategy, count = words.len(), "split input into words");
    words
}
