//! Case-transition splitting for `camelCase` and `PascalCase`
//!
//! A word starts at every upper-case character that follows a lower-case
//! character or an ASCII digit. Inside a run of upper-case characters, the
//! last one starts a new word when a lower-case character follows it, so
//! acronyms stay together: `"XMLParser"` splits into `["XML", "Parser"]`.

use super::Splitter;
use crate::words::WordSequence;

/// Splits on lower-to-upper and acronym-to-word transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseTransitionSplitter;

impl Splitter for CaseTransitionSplitter {
    fn split(&self, input: &str) -> WordSequence {
        split_uppercase(input)
    }

    fn name(&self) -> &'static str {
        "Uppercase"
    }
}

/// True when a new word starts at `current`
///
/// `prev` is the character before `current` and `next` the one after it, if
/// any.
pub fn is_word_boundary(prev: char, current: char, next: Option<char>) -> bool {
    if !current.is_uppercase() {
        return false;
    }

    if prev.is_lowercase() || prev.is_ascii_digit() {
        return true;
    }

    // Acronym followed by a word: split before the acronym's last letter
    prev.is_uppercase() && next.is_some_and(char::is_lowercase)
}

/// Split `input` at case transitions
///
/// Input without any transition comes back as a single word; the empty
/// string yields an empty sequence.
pub fn split_uppercase(input: &str) -> WordSequence {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut words = WordSequence::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, current) = chars[i];
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, ch)| ch);

        if is_word_boundary(prev, current, next) {
            words.push(&input[start..offset]);
            start = offset;
        }
    }

    if start < input.len() {
        words.push(&input[start..]);
    }

    tracing::trace!(input, count = words.len(), "case-transition split");
    words
}
