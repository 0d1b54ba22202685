//! Command-line frontend for the transliteration engine: batch
//! conversion, classifier diagnostics, and lexicon inspection.

pub mod commands;
pub mod trace;
