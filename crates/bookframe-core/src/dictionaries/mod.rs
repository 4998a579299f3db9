//! Dictionaries for text analysis.
//!
//! Provides curated word sets used by sentence splitting and part-of-speech
//! tagging.

pub mod abbreviations;
pub mod lexicon;
