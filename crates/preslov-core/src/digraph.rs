//! Digraph disambiguation for the Latin→Cyrillic direction.
//!
//! Serbian morphology can put a prefix ending in `d`/`n` next to a root
//! beginning with `j`/`ž`, where the letter pair must stay two Cyrillic
//! letters (над + јачати → надјачати) instead of merging into Ђ/Џ/Њ.
//! For words starting with a listed exception root, a zero width
//! non-joiner is inserted between the two letters of every case variant
//! of the digraph; the marker is invisible when rendered, survives into
//! the output, and keeps the substitution pass from merging the pair.

use crate::lexicon::Lexicon;

/// ZERO WIDTH NON-JOINER.
pub const ZWNJ: char = '\u{200C}';

/// Case-variant spellings of each ambiguous digraph and their split
/// forms: lower/lower, title/lower, upper/upper.
const DJ_VARIANTS: [(&str, &str); 3] = [
    ("dj", "d\u{200C}j"),
    ("Dj", "D\u{200C}j"),
    ("DJ", "D\u{200C}J"),
];
const DZ_VARIANTS: [(&str, &str); 3] = [
    ("dž", "d\u{200C}ž"),
    ("Dž", "D\u{200C}ž"),
    ("DŽ", "D\u{200C}Ž"),
];
const NJ_VARIANTS: [(&str, &str); 3] = [
    ("nj", "n\u{200C}j"),
    ("Nj", "N\u{200C}j"),
    ("NJ", "N\u{200C}J"),
];

/// Split the ambiguous digraphs of `word` wherever an exception root
/// demands it. The root match is done on the trimmed, lowercased word;
/// the rewrite is applied to the word as given, across all occurrences
/// and case variants of that digraph. The first matching root settles a
/// digraph; the remaining digraphs are still examined independently.
pub fn split_digraphs(lexicon: &Lexicon, word: &str) -> String {
    let lower = word.trim().to_lowercase();
    let mut out = word.to_string();

    let exceptions = &lexicon.digraph_exceptions;
    for (digraph, roots, variants) in [
        ("dj", &exceptions.dj, &DJ_VARIANTS),
        ("dž", &exceptions.dz, &DZ_VARIANTS),
        ("nj", &exceptions.nj, &NJ_VARIANTS),
    ] {
        if !lower.contains(digraph) {
            continue;
        }
        if roots.iter().any(|root| lower.starts_with(root.as_str())) {
            for (spelling, split) in variants {
                out = out.replace(spelling, split);
            }
        }
    }
    out
}
