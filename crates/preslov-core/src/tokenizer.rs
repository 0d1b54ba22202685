//! Splits text into words and explicit line breaks, and reassembles the
//! converted pieces.
//!
//! Inter-word whitespace other than line endings is deliberately lossy:
//! reassembly joins words with single ASCII spaces. Line endings are
//! reproduced exactly, including the distinction between `\n` and
//! `\r\n`.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+|\r\n|\n").expect("token pattern must compile"));

/// A maximal run of non-whitespace characters, or one line ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    LineBreak(&'a str),
}

/// Tokenize in document order. Spaces and tabs separate words but are
/// not emitted; a lone `\r` is dropped entirely.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| match m.as_str() {
            s @ ("\n" | "\r\n") => Token::LineBreak(s),
            s => Token::Word(s),
        })
        .collect()
}

/// Join converted pieces back into text: words separated by single
/// spaces, line endings appended verbatim after stripping the pending
/// separator space. The result carries no trailing spaces.
pub fn join<S: AsRef<str>>(pieces: &[S]) -> String {
    let mut out = String::new();
    for piece in pieces {
        let piece = piece.as_ref();
        if piece == "\n" || piece == "\r\n" {
            while out.ends_with(' ') {
                out.pop();
            }
            out.push_str(piece);
        } else {
            out.push_str(piece);
            out.push(' ');
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}
