//! Word-level part-of-speech tagging.
//!
//! The built-in [`LexiconTagger`] combines closed-class word lists, suffix
//! rules, and a little left context. It is tuned for narrative English and
//! makes no attempt at full disambiguation. Anything implementing [`Tagger`]
//! can stand in for it.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::tokenize::{self, Span};
use crate::dictionaries::lexicon;

/// Lexical class of a word.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum PartOfSpeech {
    /// Default for open-class words.
    Noun,
    /// Includes auxiliaries and every form of "be".
    Verb,
    /// Adjective.
    Adjective,
    /// Adverb, including negation.
    Adverb,
    /// Pronoun.
    Pronoun,
    /// Articles, demonstratives, possessives.
    Determiner,
    /// Infinitive "to".
    Particle,
    /// Preposition.
    Preposition,
    /// Digits or a spelled-out number.
    Number,
    /// Conjunction.
    Conjunction,
    /// Interjection.
    Interjection,
    /// A token that is neither letters nor digits.
    OtherWord,
}

impl PartOfSpeech {
    /// Tag name as reported to callers.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Verb => "Verb",
            Self::Adjective => "Adjective",
            Self::Adverb => "Adverb",
            Self::Pronoun => "Pronoun",
            Self::Determiner => "Determiner",
            Self::Particle => "Particle",
            Self::Preposition => "Preposition",
            Self::Number => "Number",
            Self::Conjunction => "Conjunction",
            Self::Interjection => "Interjection",
            Self::OtherWord => "OtherWord",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tagged word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    /// Byte range of the word in the tagged text.
    pub span: Span,
    /// Lexical class.
    pub pos: PartOfSpeech,
    /// Dictionary form, lower-case. Every form of "be" has lemma `"be"`.
    pub lemma: String,
}

/// Assigns a part of speech and lemma to each word of a text.
///
/// Punctuation and whitespace are not tagged.
pub trait Tagger {
    /// Tag every word of `text`, in order.
    fn tag(&self, text: &str) -> Vec<TaggedWord>;
}

/// Rule-based English tagger backed by [`lexicon`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedWord> {
        let mut tagged = Vec::new();
        let mut expects_verb = false;
        for span in tokenize::words(text) {
            let lower = span.slice(text).to_lowercase();
            let (mut pos, lemma) = classify(&lower);
            if pos == PartOfSpeech::Noun && expects_verb && !lower.contains(['\'', '’']) {
                pos = PartOfSpeech::Verb;
            }
            expects_verb = match pos {
                PartOfSpeech::Adverb => expects_verb,
                PartOfSpeech::Particle => true,
                PartOfSpeech::Pronoun => lexicon::SUBJECT_PRONOUNS.contains(lower.as_str()),
                PartOfSpeech::Verb => lexicon::AUXILIARIES.contains(lower.as_str()),
                _ => false,
            };
            tagged.push(TaggedWord { span, pos, lemma });
        }
        tagged
    }
}

/// Context-free class and lemma of a lower-case word.
fn classify(word: &str) -> (PartOfSpeech, String) {
    use PartOfSpeech as P;

    let Some(first) = word.chars().next() else {
        return (P::OtherWord, String::new());
    };
    if first.is_numeric() || lexicon::NUMBER_WORDS.contains(word) {
        return (P::Number, word.to_string());
    }
    if !first.is_alphabetic() {
        return (P::OtherWord, word.to_string());
    }

    // "wasn't", "don't", "can't"
    if let Some(base) = word.strip_suffix("n't").or_else(|| word.strip_suffix("n’t")) {
        if lexicon::BE_FORMS.contains(base) {
            return (P::Verb, "be".to_string());
        }
        if lexicon::AUXILIARIES.contains(base) || matches!(base, "ca" | "wo" | "sha") {
            return (P::Verb, base.to_string());
        }
    }
    // "she's", "Bennet’s": the stem decides
    if let Some((stem, _)) = word.split_once(['\'', '’']) {
        let (pos, _) = classify(stem);
        return (pos, stem.to_string());
    }

    let lemma = word.to_string();
    let pos = if lexicon::DETERMINERS.contains(word) {
        P::Determiner
    } else if lexicon::PRONOUNS.contains(word) {
        P::Pronoun
    } else if lexicon::PREPOSITIONS.contains(word) {
        P::Preposition
    } else if lexicon::CONJUNCTIONS.contains(word) {
        P::Conjunction
    } else if word == "to" {
        P::Particle
    } else if lexicon::INTERJECTIONS.contains(word) {
        P::Interjection
    } else if lexicon::BE_FORMS.contains(word) {
        return (P::Verb, "be".to_string());
    } else if lexicon::AUXILIARIES.contains(word) {
        P::Verb
    } else if lexicon::ADVERBS.contains(word) {
        P::Adverb
    } else if lexicon::ADJECTIVES.contains(word) {
        P::Adjective
    } else if lexicon::VERBS.contains(word) || lexicon::is_inflected_verb(word) {
        P::Verb
    } else {
        by_suffix(word)
    };
    (pos, lemma)
}

fn by_suffix(word: &str) -> PartOfSpeech {
    let long = word.chars().count() > 4;
    if long && word.ends_with("ly") && !lexicon::LY_NON_ADVERBS.contains(word) {
        PartOfSpeech::Adverb
    } else if long
        && word.ends_with("ed")
        && !word.ends_with("eed")
        && !lexicon::ED_NON_VERBS.contains(word)
    {
        PartOfSpeech::Verb
    } else if long && word.ends_with("ing") && !lexicon::ING_NON_VERBS.contains(word) {
        PartOfSpeech::Verb
    } else if ["ous", "ful", "less", "able", "ible", "ive"]
        .iter()
        .any(|suffix| long && word.ends_with(suffix))
    {
        PartOfSpeech::Adjective
    } else {
        PartOfSpeech::Noun
    }
}

/// Word spans grouped by part of speech, using the built-in tagger.
pub fn parts_of_speech(text: &str) -> BTreeMap<PartOfSpeech, Vec<Span>> {
    parts_of_speech_with(&LexiconTagger, text)
}

/// Word spans grouped by part of speech.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn parts_of_speech_with(tagger: &dyn Tagger, text: &str) -> BTreeMap<PartOfSpeech, Vec<Span>> {
    let mut map: BTreeMap<PartOfSpeech, Vec<Span>> = BTreeMap::new();
    for word in tagger.tag(text) {
        map.entry(word.pos).or_default().push(word.span);
    }
    map
}

/// Spans of adverbs in `text`, using the built-in tagger.
pub fn adverbs(text: &str) -> Vec<Span> {
    adverbs_with(&LexiconTagger, text)
}

/// Spans of adverbs in `text`.
pub fn adverbs_with(tagger: &dyn Tagger, text: &str) -> Vec<Span> {
    tagger
        .tag(text)
        .into_iter()
        .filter(|w| w.pos == PartOfSpeech::Adverb)
        .map(|w| w.span)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DENSE: &str = "NLP articles are fun. But they are awfully difficult to write. NLP is not difficult, but the articles, wow would awfully make you think of writing NLP Books!";
    const PLAIN: &str = "The red dog jumped over the red fox.";

    fn tags(text: &str) -> Vec<(String, PartOfSpeech)> {
        LexiconTagger
            .tag(text)
            .into_iter()
            .map(|w| (w.span.slice(text).to_string(), w.pos))
            .collect()
    }

    #[test]
    fn plain_sentence_tags() {
        use PartOfSpeech as P;
        let expected = [
            ("The", P::Determiner),
            ("red", P::Adjective),
            ("dog", P::Noun),
            ("jumped", P::Verb),
            ("over", P::Preposition),
            ("the", P::Determiner),
            ("red", P::Adjective),
            ("fox", P::Noun),
        ];
        let got = tags(PLAIN);
        assert_eq!(got.len(), expected.len());
        for ((word, pos), (want_word, want_pos)) in got.iter().zip(expected) {
            assert_eq!(word, want_word);
            assert_eq!(*pos, want_pos, "tag of {word}");
        }
    }

    #[test]
    fn nouns_of_plain_sentence() {
        let map = parts_of_speech(PLAIN);
        let nouns: Vec<&str> = map[&PartOfSpeech::Noun].iter().map(|s| s.slice(PLAIN)).collect();
        assert_eq!(nouns, vec!["dog", "fox"]);
        assert!(!map.contains_key(&PartOfSpeech::Adverb));
    }

    #[test]
    fn adverbs_of_dense_text() {
        let found: Vec<&str> = adverbs(DENSE).into_iter().map(|s| s.slice(DENSE)).collect();
        assert_eq!(found, vec!["awfully", "not", "awfully"]);
    }

    #[test]
    fn be_forms_share_a_lemma() {
        let tagged = LexiconTagger.tag("I am here, you were there, it wasn't.");
        let lemmas: Vec<&str> = tagged
            .iter()
            .filter(|w| w.pos == PartOfSpeech::Verb)
            .map(|w| w.lemma.as_str())
            .collect();
        assert_eq!(lemmas, vec!["be", "be", "be"]);
    }

    #[test]
    fn context_makes_unknown_words_verbs() {
        let got = tags("She frowns. To frown.");
        assert_eq!(got[1].1, PartOfSpeech::Verb);
        assert_eq!(got[3].1, PartOfSpeech::Verb);
        assert_eq!(tags("The frowns")[1].1, PartOfSpeech::Noun);
    }

    #[test]
    fn numbers_and_possessives() {
        let got = tags("Mr Bennet’s 3 daughters and two sons");
        assert_eq!(got[1].1, PartOfSpeech::Noun);
        assert_eq!(got[2].1, PartOfSpeech::Number);
        assert_eq!(got[5].1, PartOfSpeech::Number);
    }

    #[test]
    fn suffix_rules() {
        assert_eq!(by_suffix("quickly"), PartOfSpeech::Adverb);
        assert_eq!(by_suffix("wandered"), PartOfSpeech::Verb);
        assert_eq!(by_suffix("wandering"), PartOfSpeech::Verb);
        assert_eq!(by_suffix("famous"), PartOfSpeech::Adjective);
        assert_eq!(by_suffix("family"), PartOfSpeech::Noun);
        assert_eq!(by_suffix("morning"), PartOfSpeech::Noun);
    }

    #[test]
    fn custom_tagger_is_used() {
        struct AllAdverbs;
        impl Tagger for AllAdverbs {
            fn tag(&self, text: &str) -> Vec<TaggedWord> {
                tokenize::words(text)
                    .into_iter()
                    .map(|span| TaggedWord {
                        span,
                        pos: PartOfSpeech::Adverb,
                        lemma: span.slice(text).to_lowercase(),
                    })
                    .collect()
            }
        }
        assert_eq!(adverbs_with(&AllAdverbs, PLAIN).len(), 8);
        assert_eq!(parts_of_speech_with(&AllAdverbs, PLAIN).len(), 1);
    }

    #[test]
    fn empty_text_has_no_tags() {
        assert!(parts_of_speech("").is_empty());
        assert!(adverbs("...").is_empty());
    }
}
