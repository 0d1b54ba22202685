use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::table::CYRILLIC_TO_LATIN;

/// One-time compiled alternation over the Cyrillic table, used for the
/// whole-text Cyrillic→Latin pass.
///
/// The alternatives are sorted by descending codepoint length before
/// compilation, so the Њ/Љ/Џ + vowel entries always win over the bare
/// letters regardless of the regex engine's alternation semantics.
pub struct CyrillicMatcher {
    pattern: Regex,
    replacements: HashMap<&'static str, &'static str>,
}

impl CyrillicMatcher {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static CyrillicMatcher {
        static INSTANCE: OnceLock<CyrillicMatcher> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut entries: Vec<(&str, &str)> = CYRILLIC_TO_LATIN.to_vec();
            // Stable sort keeps table order among equal lengths
            entries.sort_by_key(|(pat, _)| std::cmp::Reverse(pat.chars().count()));
            let alternation: Vec<String> =
                entries.iter().map(|(pat, _)| regex::escape(pat)).collect();
            let pattern =
                Regex::new(&alternation.join("|")).expect("table alternation must compile");
            let replacements = CYRILLIC_TO_LATIN.iter().copied().collect();
            CyrillicMatcher {
                pattern,
                replacements,
            }
        })
    }

    /// Replace every table match in `text`, leaving everything else
    /// (Latin letters, punctuation, line endings) untouched.
    pub fn replace_all(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| self.replacements[&caps[0]])
            .into_owned()
    }
}
