//! Foreign-word classifier: decides whether a Latin-script word is a
//! loan word that must stay untransliterated.
//!
//! The rules form an ordered chain and the first match wins; their
//! order is part of the behavioral contract, not an optimization.
//! Domestic-lookalike and triple-letter checks run before any foreign
//! signal so that e.g. "shvatiti" (containing "sh") stays domestic.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::Lexicon;

/// The rule that decided a word's fate, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing left of the word after trimming punctuation.
    Empty,
    /// Starts with a domestic word that only looks foreign.
    DomesticLookalike,
    /// Contains a triple-letter run, a Serbian-coinage signal.
    TripleLetters,
    /// Contains a foreign character combination.
    ForeignCombination,
    /// Starts with a known foreign brand/tech term.
    ForeignPrefix,
    /// Equals a whole foreign word.
    WholeForeignWord,
    /// Matches the measurement-unit pattern ("5kg", "°C", "km/h").
    MeasurementUnit,
    /// No rule fired: an ordinary Serbian word.
    Domestic,
}

impl Verdict {
    pub fn is_foreign(self) -> bool {
        matches!(
            self,
            Verdict::ForeignCombination
                | Verdict::ForeignPrefix
                | Verdict::WholeForeignWord
                | Verdict::MeasurementUnit
        )
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Empty => "empty after trimming",
            Verdict::DomesticLookalike => "domestic lookalike prefix",
            Verdict::TripleLetters => "triple-letter combination",
            Verdict::ForeignCombination => "foreign character combination",
            Verdict::ForeignPrefix => "foreign word prefix",
            Verdict::WholeForeignWord => "whole foreign word",
            Verdict::MeasurementUnit => "measurement unit",
            Verdict::Domestic => "no foreign signal",
        };
        f.write_str(s)
    }
}

/// Run the rule chain and report which rule fired.
pub fn classify(lexicon: &Lexicon, word: &str) -> Verdict {
    let trimmed = trim_excessive_characters(word);
    let lower = trimmed.to_lowercase();

    if lower.is_empty() {
        return Verdict::Empty;
    }
    if starts_with_any(&lower, &lexicon.domestic_lookalikes) {
        return Verdict::DomesticLookalike;
    }
    if contains_any(&lower, &lexicon.triple_combinations) {
        return Verdict::TripleLetters;
    }
    if contains_any(&lower, &lexicon.foreign_combinations) {
        return Verdict::ForeignCombination;
    }
    if starts_with_any(&lower, &lexicon.foreign_prefixes) {
        return Verdict::ForeignPrefix;
    }
    if lexicon.whole_foreign_words.iter().any(|w| &lower == w) {
        return Verdict::WholeForeignWord;
    }
    // Case matters here: "5KG" is not a unit, "5kg" is
    if is_measurement_unit(trimmed) {
        return Verdict::MeasurementUnit;
    }
    Verdict::Domestic
}

/// True when the word must be left in Latin script.
pub fn looks_like_foreign_word(lexicon: &Lexicon, word: &str) -> bool {
    classify(lexicon, word).is_foreign()
}

/// Strip whitespace, punctuation, and quote/bracket characters from
/// both ends of the word. The middle is never touched.
pub fn trim_excessive_characters(word: &str) -> &str {
    word.trim_matches(is_excessive_char)
}

fn is_excessive_char(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '!' | '?'
                | ','
                | ':'
                | ';'
                | '.'
                | '*'
                | '-'
                | '—'
                | '~'
                | '`'
                | '\''
                | '"'
                | '„'
                | '“'
                | '”'
                | '‘'
                | '’'
                | '('
                | ')'
                | '{'
                | '}'
                | '['
                | ']'
                | '<'
                | '>'
                | '«'
                | '»'
                | '/'
                | '\\'
        )
}

fn starts_with_any(word: &str, roots: &[String]) -> bool {
    roots.iter().any(|root| word.starts_with(root.as_str()))
}

fn contains_any(word: &str, parts: &[String]) -> bool {
    parts.iter().any(|part| word.contains(part.as_str()))
}

// SI-style unit symbols, with optional metric prefix, optional leading
// decimal number, optional unit/unit compound, plus °F/°C. The first
// alternative is anchored only at the start, matching the historical
// behavior. The hecto- prefix is left out of the standalone meter forms
// so that "hm" (an interjection in Serbian) still transliterates.
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    let unit = "(?:[zafpnμmcdhKMGTPEY]?(?:[BVWJFSHCΩATNhlmg]|m[²³]?|s²?|cd|Pa|Wb|Hz))";
    let opt_unit = "(?:°[FC]|[kMGTPZY](?:B|Hz)|[pnμmcdk]m[²³]?|m[²³]|[mcdh][lg]|kg|km)";
    let number = r"(?:\d+(?:[.,]\d)*)";
    let pattern = format!("^(?:{number}{unit})|^(?:{number}?(?:{opt_unit}|{unit}/{unit}))$");
    Regex::new(&pattern).expect("unit pattern must compile")
});

/// Match the pre-trimmed, case-preserved word against the unit pattern.
pub fn is_measurement_unit(word: &str) -> bool {
    UNIT_RE.is_match(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(word: &str) -> Verdict {
        classify(Lexicon::global(), word)
    }

    fn foreign(word: &str) -> bool {
        looks_like_foreign_word(Lexicon::global(), word)
    }

    #[test]
    fn ordinary_serbian_words_are_domestic() {
        assert_eq!(verdict("kuća"), Verdict::Domestic);
        assert_eq!(verdict("planina"), Verdict::Domestic);
        assert_eq!(verdict("Beograd"), Verdict::Domestic);
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert_eq!(verdict(""), Verdict::Empty);
        assert_eq!(verdict("—!?"), Verdict::Empty);
        assert!(!foreign("..."));
    }

    #[test]
    fn domestic_lookalike_overrides_foreign_cluster() {
        // "sh" is a foreign combination, but these start with listed roots
        assert_eq!(verdict("shvatiti"), Verdict::DomesticLookalike);
        assert_eq!(verdict("neshvaćen"), Verdict::DomesticLookalike);
        assert_eq!(verdict("ishrana"), Verdict::DomesticLookalike);
    }

    #[test]
    fn triple_letters_beat_foreign_signals() {
        // "ooo" contains "oo" style doubles yet stays domestic
        assert_eq!(verdict("jooo"), Verdict::TripleLetters);
        assert_eq!(verdict("hmmm"), Verdict::TripleLetters);
    }

    #[test]
    fn foreign_combinations() {
        assert_eq!(verdict("show"), Verdict::ForeignCombination); // sh
        assert_eq!(verdict("quiz"), Verdict::ForeignCombination); // q
        assert_eq!(verdict("sajt.com"), Verdict::ForeignCombination);
        assert_eq!(verdict("naïve"), Verdict::ForeignCombination); // ï
        assert!(foreign("w3c"));
    }

    #[test]
    fn foreign_prefixes() {
        assert_eq!(verdict("google"), Verdict::ForeignPrefix);
        assert_eq!(verdict("Googleu"), Verdict::ForeignPrefix); // inflected
        assert_eq!(verdict("macbook"), Verdict::ForeignPrefix);
        assert_eq!(verdict("viberom"), Verdict::ForeignPrefix);
    }

    #[test]
    fn whole_foreign_words_match_exactly() {
        assert_eq!(verdict("and"), Verdict::WholeForeignWord);
        assert_eq!(verdict("dj"), Verdict::WholeForeignWord);
        // Not a whole-word match once inflected
        assert_ne!(verdict("andova"), Verdict::WholeForeignWord);
    }

    #[test]
    fn casing_is_ignored_for_list_rules() {
        assert!(foreign("GOOGLE"));
        assert!(foreign("\"Google\""));
    }

    #[test]
    fn trimming_reaches_through_quotes() {
        assert_eq!(trim_excessive_characters("„reč?!“"), "reč");
        assert_eq!(trim_excessive_characters("«kuća»"), "kuća");
        assert_eq!(trim_excessive_characters("(zagrada)"), "zagrada");
        assert_eq!(trim_excessive_characters("sredina-nije.dirnuta"), "sredina-nije.dirnuta");
    }

    #[test]
    fn measurement_units_are_foreign() {
        assert!(foreign("5kg"));
        assert!(foreign("12km"));
        assert!(foreign("3,5kg"));
        assert!(foreign("°C"));
        assert!(foreign("m/s"));
        assert!(foreign("mA/cm"));
        assert!(foreign("5GB"));
        assert!(foreign("230V"));
    }

    #[test]
    fn unit_lookalikes_stay_domestic() {
        assert!(!foreign("5kom")); // not a unit symbol
        assert!(!foreign("hm")); // interjection, not hectometers
        // The lowercase kilo- prefix is not valid on the slash form
        assert!(!foreign("km/h"));
        assert_eq!(verdict("godina"), Verdict::Domestic);
    }

    #[test]
    fn unit_check_is_case_sensitive() {
        assert!(is_measurement_unit("5kg"));
        assert!(!is_measurement_unit("5KG"));
    }

    #[test]
    fn every_whole_foreign_word_is_foreign() {
        let lex = Lexicon::global();
        for word in &lex.whole_foreign_words {
            assert!(looks_like_foreign_word(lex, word), "{word} should be foreign");
        }
    }

    #[test]
    fn every_domestic_lookalike_is_domestic() {
        let lex = Lexicon::global();
        for word in &lex.domestic_lookalikes {
            assert!(
                !looks_like_foreign_word(lex, word),
                "{word} should be domestic"
            );
        }
    }

    #[test]
    fn bare_unit_needs_full_match() {
        // Optional-number units are end-anchored when no number leads
        assert!(is_measurement_unit("kg"));
        assert!(!is_measurement_unit("kga"));
    }
}
