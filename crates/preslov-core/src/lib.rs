//! Serbian Latin ⇄ Cyrillic transliteration engine.
//!
//! The Latin→Cyrillic direction tokenizes the input, decides per word
//! whether it is a foreign term that stays in Latin script, splits
//! ambiguous digraphs at morpheme boundaries, and applies an ordered
//! substitution table. The Cyrillic→Latin direction is a single
//! substitution pass over the whole text.
//!
//! Both entry points are pure functions over `&str`. All tables are
//! built once and shared; concurrent calls need no synchronization.
//!
//! Note that the two directions are not mutual inverses on arbitrary
//! input: `to_cyrillic` expects Latin-script Serbian and `to_latin`
//! expects Cyrillic. Feeding either its own output is outside the
//! usage contract (though `to_cyrillic` on Cyrillic text is a no-op,
//! since no Latin pattern matches).

pub mod classifier;
pub mod convert;
pub mod digraph;
pub mod host;
pub mod lexicon;
pub mod mapping;
pub mod tokenizer;

pub use convert::{to_cyrillic, to_latin};
pub use host::{convert_selection, Direction, EditorHost};
pub use lexicon::{Lexicon, LexiconError};
