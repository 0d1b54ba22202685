//! Curated word lists backing the foreign-word heuristics, loaded from
//! TOML with the same OnceLock pattern as the substitution tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before the first
//!   `Lexicon::global()` call
//! - `Lexicon::global()` returns `&'static Lexicon` (lazy-init singleton)
//! - Default lists are embedded via `include_str!("default_lexicon.toml")`

mod config;

pub use config::LexiconError;

use std::sync::OnceLock;

use config::parse_lexicon_toml;

pub const DEFAULT_LEXICON_TOML: &str = include_str!("default_lexicon.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before the first `Lexicon::global()` call.
pub fn init_custom(toml_content: String) -> Result<(), LexiconError> {
    // Validate eagerly
    parse_lexicon_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| LexiconError::AlreadyInitialized)
}

/// Returns the embedded default lexicon TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_LEXICON_TOML
}

/// The five curated word lists plus the digraph-exception roots.
///
/// Every entry is lowercase. Tests are done against trimmed, lowercased
/// word forms, so no per-lookup case folding of the lists is needed.
#[derive(Debug)]
pub struct Lexicon {
    /// Serbian words that merely look foreign (checked as word prefixes).
    pub domestic_lookalikes: Vec<String>,
    /// Substrings that flag a word as foreign (rare letters, diacritics
    /// absent from Serbian, domain suffixes, consonant clusters).
    pub foreign_combinations: Vec<String>,
    /// Brand/tech terms, matched as word prefixes.
    pub foreign_prefixes: Vec<String>,
    /// Words foreign only when they match the whole word.
    pub whole_foreign_words: Vec<String>,
    /// Three-in-a-row repeated letters, a strong domestic-word signal.
    pub triple_combinations: Vec<String>,
    /// Roots where a digraph spells two separate letters.
    pub digraph_exceptions: DigraphExceptions,
}

/// Word roots, per digraph, at which `dj`/`dž`/`nj` must not merge into
/// a single Cyrillic letter.
#[derive(Debug)]
pub struct DigraphExceptions {
    pub dj: Vec<String>,
    pub dz: Vec<String>,
    pub nj: Vec<String>,
}

impl Lexicon {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_LEXICON_TOML);
            parse_lexicon_toml(toml_str).expect("lexicon TOML must be valid")
        })
    }
}
