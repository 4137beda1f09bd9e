//! Delimiter-based splitting for `snake_case`, `kebab-case` and friends

use super::Splitter;
use crate::words::WordSequence;

/// Splits on a single delimiter character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterSplitter {
    delimiter: char,
}

impl DelimiterSplitter {
    /// Create a splitter for `delimiter`
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Splitter for DelimiterSplitter {
    fn split(&self, input: &str) -> WordSequence {
        split_delimited(self.delimiter, input)
    }

    fn name(&self) -> &'static str {
        match self.delimiter {
            '_' => "Underscore",
            '-' => "Dash",
            _ => "Delimiter",
        }
    }
}

/// Split on `delimiter`, ignoring leading, trailing and repeated delimiters
///
/// `"__hello_____world__"` yields `["hello", "world"]`. The result never
/// contains an empty word.
pub fn split_delimited(delimiter: char, input: &str) -> WordSequence {
    input
        .split(delimiter)
        .filter(|word| !word.is_empty())
        .collect()
}
