//! Script mapper: applies the ordered substitution tables.

mod matcher;
mod table;

pub use matcher::CyrillicMatcher;
pub use table::{CYRILLIC_TO_LATIN, LATIN_TO_CYRILLIC};

/// Transliterate one word to Cyrillic by applying `LATIN_TO_CYRILLIC`
/// strictly in table order: every occurrence of the current pattern is
/// replaced before the next entry is considered. Digraph ambiguity must
/// already be resolved by the caller (see [`crate::digraph`]); a zero
/// width non-joiner between two letters simply fails to match any
/// digraph entry, so the letters map individually.
///
/// Characters matching no pattern pass through unchanged, including the
/// non-joiner itself.
pub fn word_to_cyrillic(word: &str) -> String {
    let mut out = word.to_string();
    for (pattern, replacement) in LATIN_TO_CYRILLIC {
        if out.contains(pattern) {
            out = out.replace(pattern, replacement);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_word() {
        assert_eq!(word_to_cyrillic("Beograd"), "Београд");
    }

    #[test]
    fn digraphs_merge() {
        assert_eq!(word_to_cyrillic("ljubav"), "љубав");
        assert_eq!(word_to_cyrillic("džep"), "џеп");
        assert_eq!(word_to_cyrillic("Njegoš"), "Његош");
    }

    #[test]
    fn all_caps_digraph() {
        assert_eq!(word_to_cyrillic("NJEGOŠ"), "ЊЕГОШ");
    }

    #[test]
    fn cyrillic_j_spelling_of_digraph() {
        // d + Cyrillic ј, as produced by partially converted text
        assert_eq!(word_to_cyrillic("d\u{458}ak"), "ђак");
    }

    #[test]
    fn ligature_forms() {
        assert_eq!(word_to_cyrillic("\u{1C8}ubav"), "Љубав");
        assert_eq!(word_to_cyrillic("\u{FB01}lm"), "филм");
    }

    #[test]
    fn combining_marks_match_precomposed() {
        // "Čačak" with precomposed and with combining carons
        assert_eq!(word_to_cyrillic("\u{10C}a\u{10D}ak"), "Чачак");
        assert_eq!(word_to_cyrillic("C\u{30C}ac\u{30C}ak"), "Чачак");
        assert_eq!(word_to_cyrillic("s\u{30C}uma"), word_to_cyrillic("šuma"));
    }

    #[test]
    fn non_joiner_blocks_merge() {
        assert_eq!(word_to_cyrillic("nad\u{200C}jača"), "над\u{200C}јача");
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(word_to_cyrillic("x7!"), "x7!");
        assert_eq!(word_to_cyrillic(""), "");
    }

    #[test]
    fn cyrillic_input_is_untouched() {
        assert_eq!(word_to_cyrillic("Београд"), "Београд");
    }
}
