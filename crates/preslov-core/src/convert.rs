//! Conversion drivers for both directions.
//!
//! Latin→Cyrillic walks the token stream and runs the per-word
//! pipeline: hyphenated foreign prefix → classifier → digraph split →
//! substitution table. Cyrillic→Latin needs no per-word decisions and
//! is one matcher pass over the whole text.

use tracing::{debug, debug_span};

use crate::classifier::{looks_like_foreign_word, trim_excessive_characters};
use crate::digraph::split_digraphs;
use crate::lexicon::Lexicon;
use crate::mapping::{word_to_cyrillic, CyrillicMatcher};
use crate::tokenizer::{join, tokenize, Token};

/// Convert Latin-script Serbian text to Cyrillic.
///
/// Words classified as foreign are kept verbatim; everything else runs
/// through digraph disambiguation and the substitution table. Line
/// endings are preserved exactly, other inter-word whitespace collapses
/// to single spaces. Empty or whitespace-only input is returned as-is.
pub fn to_cyrillic(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let _span = debug_span!("to_cyrillic", len = text.len()).entered();
    let lexicon = Lexicon::global();

    let mut foreign = 0usize;
    let pieces: Vec<String> = tokenize(text)
        .into_iter()
        .map(|token| match token {
            Token::LineBreak(b) => b.to_string(),
            Token::Word(word) => {
                if let Some(head_chars) = foreign_hyphen_prefix_len(lexicon, word) {
                    // The foreign root plus hyphen stays; only the
                    // remainder is transliterated, with no further
                    // classification
                    let cut = word
                        .char_indices()
                        .nth(head_chars)
                        .map_or(word.len(), |(i, _)| i);
                    let (head, tail) = word.split_at(cut);
                    let mut piece = head.to_string();
                    piece.push_str(&word_to_cyrillic(&split_digraphs(lexicon, tail)));
                    piece
                } else if looks_like_foreign_word(lexicon, word) {
                    foreign += 1;
                    word.to_string()
                } else {
                    word_to_cyrillic(&split_digraphs(lexicon, word))
                }
            }
        })
        .collect();

    debug!(tokens = pieces.len(), foreign, "converted to cyrillic");
    join(&pieces)
}

/// Convert Cyrillic text to Latin in a single substitution pass.
/// Latin letters, digits, and punctuation pass through unchanged.
pub fn to_latin(text: &str) -> String {
    let _span = debug_span!("to_latin", len = text.len()).entered();
    CyrillicMatcher::global().replace_all(text)
}

/// When the trimmed, lowercased word starts with a whole foreign word
/// followed by a hyphen, return the length in chars of that prefix
/// (hyphen included). The caller cuts the *original* word at that char
/// offset — historically the offset is computed on the trimmed form, so
/// stripped leading punctuation shifts the cut; that behavior is kept.
fn foreign_hyphen_prefix_len(lexicon: &Lexicon, word: &str) -> Option<usize> {
    let trimmed = trim_excessive_characters(word).to_lowercase();
    if trimmed.is_empty() {
        return None;
    }
    lexicon
        .whole_foreign_words
        .iter()
        .find(|candidate| {
            trimmed
                .strip_prefix(candidate.as_str())
                .is_some_and(|rest| rest.starts_with('-'))
        })
        .map(|candidate| candidate.chars().count() + 1)
}
