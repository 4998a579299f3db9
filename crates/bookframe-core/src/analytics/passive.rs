//! Passive-voice clause detection.
//!
//! A clause is passive when a form of "be" is followed, after any number of
//! adverbs, by another verb: "was eaten", "is often ignored".

use super::tagger::{LexiconTagger, PartOfSpeech, Tagger};
use super::tokenize::{self, Span};

/// First passive clause in `sentence`, using the built-in tagger.
pub fn passive_span(sentence: &str) -> Option<Span> {
    passive_span_with(&LexiconTagger, sentence)
}

/// First passive clause in `sentence`.
///
/// The span runs from the start of the "be" verb to the end of the verb
/// that follows it.
pub fn passive_span_with(tagger: &dyn Tagger, sentence: &str) -> Option<Span> {
    let words = tagger.tag(sentence);
    words
        .iter()
        .enumerate()
        .filter(|(_, w)| w.pos == PartOfSpeech::Verb && w.lemma == "be")
        .find_map(|(i, be)| {
            let next = words[i + 1..]
                .iter()
                .find(|w| w.pos != PartOfSpeech::Adverb)?;
            (next.pos == PartOfSpeech::Verb).then(|| be.span.join(next.span))
        })
}

/// Passive clauses across all sentences of `text`, at most one per sentence.
///
/// Spans are byte offsets into `text`.
pub fn passive_spans(text: &str) -> Vec<Span> {
    passive_spans_with(&LexiconTagger, text)
}

/// Passive clauses across all sentences of `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn passive_spans_with(tagger: &dyn Tagger, text: &str) -> Vec<Span> {
    tokenize::sentences(text)
        .into_iter()
        .filter_map(|sentence| {
            passive_span_with(tagger, sentence.slice(text)).map(|span| span.shift(sentence.start))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(sentence: &str) -> Option<&str> {
        passive_span(sentence).map(|span| span.slice(sentence))
    }

    #[test]
    fn simple_passive() {
        assert_eq!(found("My sandwich was eaten by bears."), Some("was eaten"));
    }

    #[test]
    fn skips_be_followed_by_adjective() {
        assert_eq!(
            found("It is true that my sandwich was eaten by bears."),
            Some("was eaten")
        );
    }

    #[test]
    fn adverbs_between() {
        assert_eq!(found("The letter was quickly written."), Some("was quickly written"));
        assert_eq!(found("He is not often mentioned."), Some("is not often mentioned"));
    }

    #[test]
    fn active_sentences() {
        assert_eq!(found("The red dog jumped over the red fox."), None);
        assert_eq!(
            found("NLP articles are fun. But they are awfully difficult to write."),
            None
        );
        assert_eq!(found("She was"), None);
        assert_eq!(found(""), None);
    }

    #[test]
    fn spans_across_sentences() {
        let text = "The dog barked. The cake was eaten. Nobody saw it.";
        let spans = passive_spans(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].slice(text), "was eaten");
    }
}
