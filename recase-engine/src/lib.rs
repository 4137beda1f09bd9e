//! Pipeline for converting identifiers between naming conventions
//!
//! This crate provides the three pure stages of a conversion: the detector
//! that picks a splitting strategy, the splitters that break an identifier
//! into words, and the composer that glues words back together under a
//! target convention.

#![warn(missing_docs)]

pub mod composer;
pub mod convention;
pub mod detector;
pub mod error;
pub mod splitter;
pub mod words;

// Re-export key types
pub use composer::{glue, glue_with};
pub use convention::{GlueRules, LetterCase, NamingConvention};
pub use detector::{analyse, is_uppercase_word, SourceStrategy};
pub use error::{EngineError, Result};
pub use splitter::{split, split_delimited, split_uppercase, Splitter};
pub use words::WordSequence;
