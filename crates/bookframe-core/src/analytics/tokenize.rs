//! Word and sentence boundaries as byte spans.
//!
//! Words are runs of letters and digits, with inner apostrophes kept
//! ("don't", "Bennet’s"). Sentences end at `.`, `!`, or `?` unless the
//! period belongs to an abbreviation, an initial, a decimal, or a URL.
//! A blank line always ends a sentence.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::abbreviations::is_abbreviation;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*").expect("valid regex"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("valid regex"));

/// A half-open byte range into some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct Span {
    /// First byte.
    pub start: usize,
    /// One past the last byte.
    pub end: usize,
}

impl Span {
    /// Create a span.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The text this span covers.
    ///
    /// # Panics
    ///
    /// If the span is not on character boundaries of `text`.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Span moved right by `offset` bytes.
    #[must_use]
    pub const fn shift(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Smallest span covering both.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Word spans in `text`, skipping punctuation and whitespace.
pub fn words(text: &str) -> Vec<Span> {
    WORD.find_iter(text).map(|m| m.range().into()).collect()
}

/// Sentence spans in `text`, trimmed of surrounding whitespace.
///
/// Fragments without a single letter or digit are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn sentences(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut para_start = 0;
    for brk in PARAGRAPH_BREAK.find_iter(text) {
        split_paragraph(text, para_start, brk.start(), &mut spans);
        para_start = brk.end();
    }
    split_paragraph(text, para_start, text.len(), &mut spans);
    spans
}

fn split_paragraph(text: &str, from: usize, to: usize, out: &mut Vec<Span>) {
    let chars: Vec<(usize, char)> = text[from..to]
        .char_indices()
        .map(|(i, c)| (i + from, c))
        .collect();
    let mut start = from;
    let mut i = 0;
    while i < chars.len() {
        if !is_terminator(chars[i].1) {
            i += 1;
            continue;
        }
        // Take the whole run of terminators, then any closing quotes.
        let first = i;
        while i + 1 < chars.len() && is_terminator(chars[i + 1].1) {
            i += 1;
        }
        let last_terminator = i;
        while i + 1 < chars.len() && is_closer(chars[i + 1].1) {
            i += 1;
        }
        let end = chars[i].0 + chars[i].1.len_utf8();
        if is_boundary(&chars, first, last_terminator, i) {
            push_trimmed(text, start, end, out);
            start = end;
        }
        i += 1;
    }
    push_trimmed(text, start, to, out);
}

fn push_trimmed(text: &str, start: usize, end: usize, out: &mut Vec<Span>) {
    let slice = &text[start..end];
    let lead = slice.len() - slice.trim_start().len();
    let trimmed = slice.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        let s = start + lead;
        out.push(Span::new(s, s + trimmed.len()));
    }
}

const fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

const fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’' | '»')
}

const fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '“' | '‘' | '«')
}

/// `first..=last` are the terminators; `tail` is the last closing mark.
fn is_boundary(chars: &[(usize, char)], first: usize, last: usize, tail: usize) -> bool {
    let Some(&(_, after)) = chars.get(tail + 1) else {
        return true;
    };
    // "3.14", "example.com", "e.g." mid-token
    if !after.is_whitespace() {
        return false;
    }
    let next = chars[tail + 1..]
        .iter()
        .map(|&(_, c)| c)
        .find(|c| !c.is_whitespace() && !is_opener(*c));
    let Some(next) = next else {
        return true;
    };

    if chars[last].1 != '.' {
        // "What?" she asked.
        return !next.is_lowercase();
    }
    if last == first {
        let before = word_before(chars, first);
        if is_abbreviation(&before) || is_initial(&before) {
            return false;
        }
    }
    !next.is_lowercase()
}

fn word_before(chars: &[(usize, char)], pos: usize) -> String {
    let mut word: Vec<char> = chars[..pos]
        .iter()
        .rev()
        .map(|&(_, c)| c)
        .take_while(|c| c.is_alphanumeric() || *c == '.')
        .collect();
    word.reverse();
    word.into_iter().collect()
}

/// A single capital letter, optionally preceded by other initials ("J.K").
fn is_initial(word: &str) -> bool {
    word.split('.')
        .all(|part| part.chars().count() == 1 && part.chars().all(char::is_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_texts(text: &str) -> Vec<&str> {
        sentences(text).into_iter().map(|s| s.slice(text)).collect()
    }

    fn word_texts(text: &str) -> Vec<&str> {
        words(text).into_iter().map(|s| s.slice(text)).collect()
    }

    #[test]
    fn words_skip_punctuation() {
        assert_eq!(
            word_texts("The red dog jumped over the red fox."),
            vec!["The", "red", "dog", "jumped", "over", "the", "red", "fox"]
        );
    }

    #[test]
    fn words_keep_inner_apostrophes() {
        assert_eq!(
            word_texts("Don't touch Bennet’s '3rd' book."),
            vec!["Don't", "touch", "Bennet’s", "3rd", "book"]
        );
    }

    #[test]
    fn word_spans_are_byte_offsets() {
        let text = "Élan vital";
        let spans = words(text);
        assert_eq!(spans[0], Span::new(0, 5));
        assert_eq!(spans[1].slice(text), "vital");
    }

    #[test]
    fn three_sentences() {
        let text = "NLP articles are fun. But they are awfully difficult to write. NLP is not difficult, but the articles, wow would awfully make you think of writing NLP Books!";
        let found = sentence_texts(text);
        assert_eq!(found.len(), 3);
        assert_eq!(found[0], "NLP articles are fun.");
        assert!(found[2].ends_with("Books!"));
    }

    #[test]
    fn single_sentence() {
        assert_eq!(sentence_texts("The red dog jumped over the red fox.").len(), 1);
    }

    #[test]
    fn abbreviations_and_initials_do_not_split() {
        let found = sentence_texts("Mr. Bennet met J. K. Smith at 3.30 today. He left.");
        assert_eq!(found, vec!["Mr. Bennet met J. K. Smith at 3.30 today.", "He left."]);
    }

    #[test]
    fn quoted_question_continues_sentence() {
        let found = sentence_texts("\"Is it true?\" she asked. \"Yes!\" He smiled.");
        assert_eq!(found, vec!["\"Is it true?\" she asked.", "\"Yes!\"", "He smiled."]);
    }

    #[test]
    fn urls_and_ellipses() {
        let found = sentence_texts("See www.example.com for more... or not. Fine.");
        assert_eq!(found, vec!["See www.example.com for more... or not.", "Fine."]);
    }

    #[test]
    fn blank_line_ends_sentence() {
        let found = sentence_texts("A heading without stop\n\nThen prose.");
        assert_eq!(found, vec!["A heading without stop", "Then prose."]);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(sentences("").is_empty());
        assert!(sentences("  ... ").is_empty());
        assert!(words("").is_empty());
    }

    #[test]
    fn span_helpers() {
        let a = Span::new(2, 4);
        assert_eq!(a.shift(3), Span::new(5, 7));
        assert_eq!(a.join(Span::new(6, 9)), Span::new(2, 9));
        assert_eq!(Span::from(1..3), Span::new(1, 3));
    }
}
