//! Combined prose report over a passage of scene text.

use std::collections::BTreeMap;

use pulldown_cmark::{Event, Parser, TagEnd};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::passive::passive_span_with;
use super::readability::{self, Difficulty, ReadabilityReport};
use super::tagger::{LexiconTagger, PartOfSpeech, Tagger};
use super::tokenize::{self, Span};

/// Readability and voice for one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceReport {
    /// Byte range in [`ProseReport::text`].
    pub span: Span,
    /// Flesch Reading Ease of this sentence alone.
    pub reading_ease: f64,
    /// Band for `reading_ease`.
    pub difficulty: Difficulty,
    /// Passive clause, if any.
    pub passive: Option<Span>,
}

/// Everything the preview pass knows about a passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProseReport {
    /// The analyzed text with Markdown markup removed. All spans index into it.
    pub text: String,
    /// Whole-passage scores.
    pub readability: ReadabilityReport,
    /// Per-sentence scores, in order.
    pub sentences: Vec<SentenceReport>,
    /// Adverb spans.
    pub adverbs: Vec<Span>,
    /// Number of words per part of speech.
    pub pos_counts: BTreeMap<PartOfSpeech, usize>,
}

impl ProseReport {
    /// Sentences whose score falls in `difficulty`.
    pub fn sentences_with(&self, difficulty: Difficulty) -> impl Iterator<Item = &SentenceReport> {
        self.sentences.iter().filter(move |s| s.difficulty == difficulty)
    }

    /// Passive clauses across all sentences.
    pub fn passive_spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.sentences.iter().filter_map(|s| s.passive)
    }
}

/// Paragraph text of `markdown` with inline markup removed.
///
/// Paragraphs are separated by a blank line; line breaks inside a
/// paragraph become spaces.
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => {
                out.push_str("\n\n");
            }
            _ => {}
        }
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// Prose report for `markdown`, using the built-in tagger.
pub fn annotate(markdown: &str) -> ProseReport {
    annotate_with(&LexiconTagger, markdown)
}

/// Prose report for `markdown`.
#[tracing::instrument(skip_all, fields(text_len = markdown.len()))]
pub fn annotate_with(tagger: &dyn Tagger, markdown: &str) -> ProseReport {
    let text = plain_text(markdown);

    let sentences = tokenize::sentences(&text)
        .into_iter()
        .map(|span| {
            let sentence = span.slice(&text);
            let reading_ease = readability::reading_ease(sentence);
            SentenceReport {
                span,
                reading_ease,
                difficulty: Difficulty::classify(reading_ease),
                passive: passive_span_with(tagger, sentence).map(|p| p.shift(span.start)),
            }
        })
        .collect();

    let mut adverbs = Vec::new();
    let mut pos_counts: BTreeMap<PartOfSpeech, usize> = BTreeMap::new();
    for word in tagger.tag(&text) {
        *pos_counts.entry(word.pos).or_default() += 1;
        if word.pos == PartOfSpeech::Adverb {
            adverbs.push(word.span);
        }
    }

    ProseReport {
        readability: readability::readability(&text),
        sentences,
        adverbs,
        pos_counts,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_strips_emphasis() {
        let text = plain_text("*However* little **known**.\n\nSecond `line`\nwraps.");
        assert_eq!(text, "However little known.\n\nSecond line wraps.");
    }

    #[test]
    fn report_spans_index_plain_text() {
        let report = annotate("The cake was *really* eaten. She smiled happily.");
        assert_eq!(report.text, "The cake was really eaten. She smiled happily.");
        assert_eq!(report.sentences.len(), 2);

        let passive: Vec<&str> = report.passive_spans().map(|s| s.slice(&report.text)).collect();
        assert_eq!(passive, vec!["was really eaten"]);

        let adverbs: Vec<&str> = report.adverbs.iter().map(|s| s.slice(&report.text)).collect();
        assert_eq!(adverbs, vec!["really", "happily"]);
        assert_eq!(report.pos_counts[&PartOfSpeech::Adverb], 2);
    }

    #[test]
    fn report_scores_match_readability() {
        let text = "The red dog jumped over the red fox.";
        let report = annotate(text);
        assert_eq!(report.readability, readability::readability(text));
        assert_eq!(report.sentences[0].difficulty, Difficulty::Ok);
        assert_eq!(report.sentences_with(Difficulty::Ok).count(), 1);
        assert_eq!(report.sentences[0].passive, None);
    }

    #[test]
    fn empty_passage() {
        let report = annotate("");
        assert!(report.text.is_empty());
        assert!(report.sentences.is_empty());
        assert!(report.adverbs.is_empty());
        assert_eq!(report.readability.words, 0);
        assert!(report.readability.reading_ease.abs() < f64::EPSILON);
    }
}
