//! Lexical diversity and Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher is easier. Plain prose for a general audience scores 60 to 70.

use std::collections::HashSet;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::tokenize;

/// Reading difficulty band for a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// 63 and above.
    Ok,
    /// 27 up to 63.
    Hard,
    /// Below 27.
    VeryHard,
}

impl Difficulty {
    /// Band for `score`.
    pub fn classify(score: f64) -> Self {
        if score < 27.0 {
            Self::VeryHard
        } else if score < 63.0 {
            Self::Hard
        } else {
            Self::Ok
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Hard => "hard",
            Self::VeryHard => "very hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts and scores for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Sentences detected.
    pub sentences: usize,
    /// Words detected.
    pub words: usize,
    /// Total syllables.
    pub syllables: usize,
    /// Unique words as a percentage of all words.
    pub token_type_ratio: f64,
    /// Flesch Reading Ease score.
    pub reading_ease: f64,
    /// Band for `reading_ease`.
    pub difficulty: Difficulty,
}

/// Token-type ratio: unique lower-cased words over total words, times 100.
///
/// Zero for text without words.
pub fn token_type_ratio(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let spans = tokenize::words(&lower);
    if spans.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = spans.iter().map(|s| s.slice(&lower)).collect();
    unique.len() as f64 / spans.len() as f64 * 100.0
}

/// Syllables in one word, by vowel clusters.
///
/// Each run of `a e i o u y` counts once; a final `e` (but not `le`) is
/// silent. Every word has at least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let clusters = lower
        .split(|c: char| !is_vowel(c))
        .filter(|run| !run.is_empty())
        .count();
    let silent_e = lower.ends_with('e') && !lower.ends_with("le");
    clusters.saturating_sub(usize::from(silent_e)).max(1)
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Flesch Reading Ease score of `text`.
///
/// Zero when the text has no sentences or no words.
pub fn reading_ease(text: &str) -> f64 {
    let (sentences, words, syllables) = counts(text);
    fres(sentences, words, syllables)
}

/// Full readability report for `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn readability(text: &str) -> ReadabilityReport {
    let (sentences, words, syllables) = counts(text);
    let reading_ease = fres(sentences, words, syllables);
    ReadabilityReport {
        sentences,
        words,
        syllables,
        token_type_ratio: token_type_ratio(text),
        reading_ease,
        difficulty: Difficulty::classify(reading_ease),
    }
}

fn counts(text: &str) -> (usize, usize, usize) {
    let sentences = tokenize::sentences(text);
    let mut words = 0;
    let mut syllables = 0;
    for sentence in &sentences {
        let sentence = sentence.slice(text);
        for word in tokenize::words(sentence) {
            words += 1;
            syllables += count_syllables(word.slice(sentence));
        }
    }
    (sentences.len(), words, syllables)
}

fn fres(sentences: usize, words: usize, syllables: usize) -> f64 {
    if sentences == 0 || words == 0 {
        return 0.0;
    }
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    1.015f64.mul_add(-words_per_sentence, 84.6f64.mul_add(-syllables_per_word, 206.835))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DENSE: &str = "NLP articles are fun. But they are awfully difficult to write. NLP is not difficult, but the articles, wow would awfully make you think of writing NLP Books!";
    const PLAIN: &str = "The red dog jumped over the red fox.";

    #[test]
    fn ttr_of_repeated_words() {
        assert!((token_type_ratio(PLAIN) - 75.0).abs() < f64::EPSILON);
        assert!(token_type_ratio(DENSE) > 0.0);
    }

    #[test]
    fn ttr_bounds() {
        assert!((token_type_ratio("every word differs here") - 100.0).abs() < f64::EPSILON);
        assert!((token_type_ratio("The the THE") - 100.0 / 3.0).abs() < 1e-9);
        assert!(token_type_ratio("").abs() < f64::EPSILON);
        assert!(token_type_ratio("?!").abs() < f64::EPSILON);
    }

    #[test]
    fn syllable_examples() {
        let counts: Vec<usize> = ["bee", "apple", "bicycle", "quadrupedal"]
            .into_iter()
            .map(count_syllables)
            .collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn every_word_has_a_syllable() {
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("NLP"), 1);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("Jumped"), 2);
    }

    #[test]
    fn plain_sentence_reads_easily() {
        let score = reading_ease(PLAIN);
        assert!(score > 90.0, "score was {score}");
        assert_eq!(Difficulty::classify(score), Difficulty::Ok);
    }

    #[test]
    fn dense_text_scores_lower() {
        let score = reading_ease(DENSE);
        assert!(score < 80.0, "score was {score}");
    }

    #[test]
    fn degenerate_input_scores_zero() {
        assert!(reading_ease("").abs() < f64::EPSILON);
        assert!(reading_ease("...").abs() < f64::EPSILON);
    }

    #[test]
    fn classify_bands() {
        assert_eq!(Difficulty::classify(10.0), Difficulty::VeryHard);
        assert_eq!(Difficulty::classify(27.0), Difficulty::Hard);
        assert_eq!(Difficulty::classify(62.9), Difficulty::Hard);
        assert_eq!(Difficulty::classify(63.0), Difficulty::Ok);
    }

    #[test]
    fn report_collects_counts() {
        let report = readability(PLAIN);
        assert_eq!(report.sentences, 1);
        assert_eq!(report.words, 8);
        assert_eq!(report.syllables, 10);
        assert_eq!(report.difficulty, Difficulty::Ok);
        assert!((report.token_type_ratio - 75.0).abs() < f64::EPSILON);
    }
}
