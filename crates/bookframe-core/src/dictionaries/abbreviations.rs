//! Abbreviations that end in a period without ending the sentence.
//!
//! Tuned for narrative prose: short words that are also ordinary English
//! words ("sat", "sun", "no", "in") are left out so they still close a
//! sentence.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lower-case abbreviations, without their final period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Forms of address
    set.extend([
        "mr", "mrs", "ms", "messrs", "mmes", "mme", "mlle", "dr", "prof", "rev", "revd", "fr",
        "sr", "jr", "hon", "esq", "capt", "col", "gen", "lt", "maj", "sgt", "cpl", "adm", "cmdr",
        "sen", "gov", "pres", "st",
    ]);

    // Latin and scholarly
    set.extend([
        "etc", "vs", "e.g", "i.e", "cf", "viz", "ibid", "n.b", "p.s", "ca", "approx",
    ]);

    // Months and eras
    set.extend([
        "jan", "feb", "apr", "aug", "sept", "oct", "nov", "dec", "a.m", "p.m", "b.c", "a.d",
    ]);

    // Places and organizations
    set.extend([
        "ave", "blvd", "rd", "mt", "ft", "u.s", "u.k", "u.s.a", "inc", "corp", "ltd", "co",
        "bros", "dept",
    ]);

    // Book apparatus
    set.extend(["vol", "ch", "chap", "pp", "fig", "ed", "trans"]);

    set
});

/// Whether `word` (with or without trailing periods) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(lower.trim_matches('.'))
}
