//! Text analytics for scene prose.
//!
//! All functions are pure and never fail: empty or degenerate input yields
//! zero scores and empty span lists. Spans are byte offsets into the text
//! that was analyzed.
//!
//! - [`tokenize`]: word and sentence boundaries
//! - [`readability`]: token-type ratio, syllables, Flesch Reading Ease
//! - [`tagger`]: part-of-speech tagging behind the [`Tagger`] trait
//! - [`passive`]: passive-voice clauses
//! - [`report`]: everything above in one pass over Markdown prose

pub mod passive;
pub mod readability;
pub mod report;
pub mod tagger;
pub mod tokenize;

pub use passive::{passive_span, passive_span_with, passive_spans, passive_spans_with};
pub use readability::{
    Difficulty, ReadabilityReport, count_syllables, readability, reading_ease, token_type_ratio,
};
pub use report::{ProseReport, SentenceReport, annotate, annotate_with, plain_text};
pub use tagger::{
    LexiconTagger, PartOfSpeech, TaggedWord, Tagger, adverbs, adverbs_with, parts_of_speech,
    parts_of_speech_with,
};
pub use tokenize::{Span, sentences, words};
