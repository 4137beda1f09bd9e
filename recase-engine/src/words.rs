//! Word sequence produced by the splitters

/// Ordered words of one identifier, casing preserved exactly as in the input
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words were found
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Borrow the words as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub(crate) fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }
}

impl From<Vec<String>> for WordSequence {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl<'a> FromIterator<&'a str> for WordSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl PartialEq<[&str]> for WordSequence {
    fn eq(&self, other: &[&str]) -> bool {
        self.words.len() == other.len() && self.words.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for WordSequence {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}
