//! Recombination of words into a target convention

use crate::convention::{GlueRules, LetterCase};

/// Apply a letter-case transform to one word
///
/// Title upper-cases the first character with its full upper-case mapping,
/// so a character without a single-char capital expands (`ß` becomes `SS`).
pub fn apply_case(word: &str, letter_case: LetterCase) -> String {
    match letter_case {
        LetterCase::Lower => word.to_lowercase(),
        LetterCase::Upper => word.to_uppercase(),
        LetterCase::Title => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut titled: String = first.to_uppercase().collect();
                    titled.push_str(&chars.as_str().to_lowercase());
                    titled
                }
                None => String::new(),
            }
        }
    }
}

/// Glue words together
///
/// Each word is case-transformed independently and the results are joined
/// with `delimiter`. If `lower_first` is set the first word is lower-cased
/// whatever the transform produced, so `["foo", "bar"]` in upper case gives
/// `fooBAR`.
pub fn glue<S: AsRef<str>>(
    words: &[S],
    delimiter: &str,
    letter_case: LetterCase,
    lower_first: bool,
) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let case = if i == 0 && lower_first {
                LetterCase::Lower
            } else {
                letter_case
            };
            apply_case(word.as_ref(), case)
        })
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Glue words together using a convention's rules
pub fn glue_with<S: AsRef<str>>(words: &[S], rules: GlueRules) -> String {
    glue(words, rules.delimiter, rules.letter_case, rules.lower_first)
}
