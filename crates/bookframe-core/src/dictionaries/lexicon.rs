//! Word lists behind the built-in English part-of-speech tagger.
//!
//! Closed classes (determiners, pronouns, prepositions, conjunctions) are
//! listed in full. Open classes only list the common words that suffix
//! rules would get wrong, plus enough verbs to anchor inflection lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

fn set<const N: usize>(words: [&'static str; N]) -> HashSet<&'static str> {
    words.into_iter().collect()
}

/// Articles, demonstratives, possessives, and quantifiers.
pub static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its",
        "our", "their", "some", "any", "no", "every", "each", "either", "neither", "all", "both",
        "another", "much", "many", "few", "several", "enough", "which", "whose", "what",
    ])
});

/// Personal, reflexive, and indefinite pronouns.
pub static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
        "mine", "yours", "hers", "ours", "theirs", "who", "whom", "whoever", "whatever",
        "something", "anything", "nothing", "everything", "someone", "anyone", "everyone",
        "nobody", "somebody", "anybody", "everybody",
    ])
});

/// Pronouns that usually start a clause, so the next open-class word is a verb.
pub static SUBJECT_PRONOUNS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(["i", "you", "he", "she", "it", "we", "they"]));

/// Prepositions.
pub static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "about", "above", "across", "after", "against", "along", "amid", "among", "around", "at",
        "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by",
        "despite", "down", "during", "except", "for", "from", "in", "inside", "into", "like",
        "near", "of", "off", "on", "onto", "out", "outside", "over", "past", "since", "through",
        "throughout", "till", "toward", "towards", "under", "underneath", "until", "unto", "up",
        "upon", "with", "within", "without",
    ])
});

/// Coordinating and subordinating conjunctions.
pub static CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while",
        "whereas", "if", "unless", "whether", "than", "as", "once", "when", "where", "whenever",
        "wherever",
    ])
});

/// Interjections.
pub static INTERJECTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "wow", "oh", "ah", "alas", "hey", "hello", "hi", "ouch", "oops", "hmm", "hurrah", "hooray",
        "bravo", "yikes", "ugh", "aha",
    ])
});

/// Inflected forms of "be".
pub static BE_FORMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(["am", "is", "are", "was", "were", "be", "been", "being"])
});

/// Auxiliaries and modals other than "be".
pub static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "have", "has", "had", "having", "do", "does", "did", "can", "could", "may", "might",
        "must", "shall", "should", "will", "would", "ought",
    ])
});

/// Adverbs that carry no `-ly` suffix, or whose suffix is not a reliable signal.
pub static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "not", "never", "always", "often", "sometimes", "usually", "seldom", "rarely", "very",
        "too", "quite", "rather", "almost", "also", "already", "still", "just", "even", "ever",
        "here", "there", "now", "then", "soon", "today", "tomorrow", "yesterday", "tonight",
        "again", "twice", "perhaps", "maybe", "indeed", "however", "therefore", "thus", "hence",
        "meanwhile", "nevertheless", "otherwise", "instead", "afterwards", "away", "back",
        "forward", "only", "well", "else", "far", "together", "apart", "abroad", "anyway",
        "somewhat", "nearly", "hardly", "barely", "scarcely", "really",
    ])
});

/// Adjectives that suffix rules would miss or mis-tag.
pub static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "good", "bad", "new", "old", "great", "big", "small", "little", "large", "long", "short",
        "high", "low", "young", "early", "late", "important", "right", "wrong", "true", "false",
        "real", "sure", "free", "full", "whole", "hard", "easy", "difficult", "simple", "clear",
        "different", "same", "other", "own", "best", "better", "worse", "worst", "able",
        "certain", "possible", "likely", "happy", "sad", "red", "blue", "green", "black",
        "white", "yellow", "brown", "grey", "gray", "dark", "light", "single", "fine", "kind",
        "poor", "rich", "strong", "weak", "warm", "cold", "hot", "quiet", "loud", "lovely",
        "friendly", "lonely", "ugly", "holy", "silly", "elderly", "lively", "deadly", "costly",
        "handsome", "clever", "pretty", "proud", "rightful", "sorry", "glad", "afraid", "alone",
        // Participle-shaped words that read as states rather than actions.
        "tired", "excited", "interested", "bored", "confused", "worried", "scared",
        "frightened", "amazed", "surprised", "shocked", "pleased", "satisfied", "disappointed",
        "frustrated", "embarrassed", "ashamed", "annoyed", "delighted", "talented", "beloved",
        "learned", "skilled", "experienced", "supposed", "concerned", "determined", "devoted",
        "distinguished", "educated", "married", "engaged", "naked", "wicked", "sacred",
    ])
});

/// Words ending in `-ly` that are not adverbs.
pub static LY_NON_ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "family", "reply", "apply", "supply", "rely", "ally", "belly", "jelly", "bully", "lily",
        "assembly", "anomaly", "monopoly", "melancholy", "italy", "july", "butterfly",
    ])
});

/// Words ending in `-ing` that are not verb forms.
pub static ING_NON_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "thing", "things", "morning", "evening", "king", "ring", "spring", "string", "wing",
        "ceiling", "nothing", "something", "anything", "everything", "during", "darling",
        "pudding", "wedding", "sibling", "duckling", "shilling", "farthing",
    ])
});

/// Words ending in `-ed` that are not verb forms.
pub static ED_NON_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(["hundred", "kindred", "sacred", "naked", "wicked", "bed", "shed", "sled"])
});

/// Base forms of common verbs.
pub static VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "go", "come", "make", "take", "get", "give", "know", "think", "see", "look", "want",
        "use", "find", "tell", "ask", "work", "seem", "feel", "try", "leave", "call", "keep",
        "let", "begin", "help", "talk", "turn", "start", "show", "hear", "play", "run", "move",
        "live", "believe", "bring", "happen", "write", "sit", "stand", "lose", "pay", "meet",
        "include", "continue", "set", "learn", "change", "lead", "understand", "watch",
        "follow", "stop", "create", "speak", "read", "spend", "grow", "open", "walk", "win",
        "offer", "remember", "love", "consider", "appear", "buy", "wait", "serve", "die", "send",
        "expect", "build", "stay", "fall", "cut", "reach", "kill", "remain", "suggest", "raise",
        "pass", "sell", "require", "report", "decide", "pull", "eat", "drink", "sleep", "jump",
        "say", "cry", "laugh", "smile", "marry", "dance", "visit", "return", "answer", "reply",
        "wish", "hope", "fear", "wonder", "enter", "receive", "describe", "fix", "acknowledge",
        "possess",
    ])
});

/// Irregular past tenses and past participles.
pub static IRREGULAR_FORMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "done", "gone", "seen", "known", "given", "taken", "made", "become", "written", "spoken",
        "broken", "chosen", "driven", "eaten", "fallen", "forgotten", "forgiven", "frozen",
        "gotten", "hidden", "ridden", "risen", "shaken", "shown", "stolen", "sworn", "torn",
        "thrown", "worn", "beaten", "bitten", "blown", "drawn", "flown", "grown", "withdrawn",
        "begun", "drunk", "rung", "sunk", "sung", "swum", "won", "hung", "struck", "stuck",
        "arisen", "awoken", "borne", "forbidden", "forsaken", "mistaken", "proven", "woven",
        "said", "paid", "laid", "heard", "sold", "told", "held", "left", "kept", "slept", "wept",
        "swept", "felt", "dealt", "meant", "sent", "spent", "built", "burnt", "brought",
        "bought", "caught", "crept", "dug", "fed", "fought", "found", "fled", "forgot", "froze",
        "got", "grew", "hid", "hit", "hurt", "knew", "led", "lost", "met", "put", "ran", "rang",
        "saw", "sought", "shone", "shot", "shut", "slain", "spread", "stood", "taught",
        "thought", "threw", "took", "tore", "understood", "woke", "wore", "went", "came",
        "gave", "wrote", "sat", "spoke", "ate", "drank", "began", "became", "chose", "drove",
        "rode", "rose", "stole", "swore", "broke", "fell", "flew", "sang",
    ])
});

/// Spelled-out numbers.
pub static NUMBER_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set([
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
        "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million",
    ])
});

/// Whether `base` names a known verb.
pub fn is_verb_base(base: &str) -> bool {
    VERBS.contains(base) || BE_FORMS.contains(base) || AUXILIARIES.contains(base)
}

/// Whether a lower-case word is an inflection (`-s`, `-ed`, `-ing`) of a known verb.
pub fn is_inflected_verb(word: &str) -> bool {
    if IRREGULAR_FORMS.contains(word) {
        return true;
    }
    let candidates = [
        word.strip_suffix("ies").map(|stem| format!("{stem}y")),
        word.strip_suffix("es").map(str::to_string),
        word.strip_suffix('s').map(str::to_string),
        word.strip_suffix("ied").map(|stem| format!("{stem}y")),
        word.strip_suffix("ed").map(str::to_string),
        word.strip_suffix('d').map(str::to_string),
        word.strip_suffix("ing").map(str::to_string),
        word.strip_suffix("ing").map(|stem| format!("{stem}e")),
    ];
    candidates.into_iter().flatten().any(|stem| {
        is_verb_base(&stem) || undouble(&stem).is_some_and(|s| is_verb_base(s))
    })
}

/// `"stopp"` to `"stop"`: drop a doubled final consonant.
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    (chars.next() == Some(last) && !"aeiou".contains(last)).then(|| &stem[..stem.len() - last.len_utf8()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflections_of_known_verbs() {
        assert!(is_inflected_verb("jumped"));
        assert!(is_inflected_verb("writes"));
        assert!(is_inflected_verb("writing"));
        assert!(is_inflected_verb("married"));
        assert!(is_inflected_verb("stopped"));
        assert!(is_inflected_verb("eaten"));
        assert!(!is_inflected_verb("articles"));
        assert!(!is_inflected_verb("dog"));
    }

    #[test]
    fn closed_classes_do_not_overlap_where_it_matters() {
        for word in ["the", "a", "my"] {
            assert!(DETERMINERS.contains(word));
            assert!(!PRONOUNS.contains(word));
        }
        assert!(BE_FORMS.contains("was"));
        assert!(!AUXILIARIES.contains("was"));
    }
}
