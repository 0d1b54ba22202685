use serde::Deserialize;

use super::{DigraphExceptions, Lexicon};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconConfig {
    #[serde(rename = "domestic-lookalikes")]
    domestic_lookalikes: Vec<String>,
    #[serde(rename = "foreign-combinations")]
    foreign_combinations: Vec<String>,
    #[serde(rename = "foreign-prefixes")]
    foreign_prefixes: Vec<String>,
    #[serde(rename = "whole-foreign-words")]
    whole_foreign_words: Vec<String>,
    #[serde(rename = "triple-combinations")]
    triple_combinations: Vec<String>,
    #[serde(rename = "digraph-exceptions")]
    digraph_exceptions: DigraphExceptionsConfig,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DigraphExceptionsConfig {
    dj: Vec<String>,
    #[serde(rename = "dž")]
    dz: Vec<String>,
    nj: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("list {0} is empty")]
    EmptyList(&'static str),
    #[error("empty entry in list {0}")]
    EmptyEntry(&'static str),
    #[error("entry {entry:?} in list {list} is not lowercase")]
    NotLowercase { list: &'static str, entry: String },
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a validated `Lexicon`.
pub fn parse_lexicon_toml(toml_str: &str) -> Result<Lexicon, LexiconError> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

    let lexicon = Lexicon {
        domestic_lookalikes: config.domestic_lookalikes,
        foreign_combinations: config.foreign_combinations,
        foreign_prefixes: config.foreign_prefixes,
        whole_foreign_words: config.whole_foreign_words,
        triple_combinations: config.triple_combinations,
        digraph_exceptions: DigraphExceptions {
            dj: config.digraph_exceptions.dj,
            dz: config.digraph_exceptions.dz,
            nj: config.digraph_exceptions.nj,
        },
    };

    for (name, list) in [
        ("domestic-lookalikes", &lexicon.domestic_lookalikes),
        ("foreign-combinations", &lexicon.foreign_combinations),
        ("foreign-prefixes", &lexicon.foreign_prefixes),
        ("whole-foreign-words", &lexicon.whole_foreign_words),
        ("triple-combinations", &lexicon.triple_combinations),
        ("digraph-exceptions.dj", &lexicon.digraph_exceptions.dj),
        ("digraph-exceptions.dž", &lexicon.digraph_exceptions.dz),
        ("digraph-exceptions.nj", &lexicon.digraph_exceptions.nj),
    ] {
        validate_list(name, list)?;
    }

    Ok(lexicon)
}

fn validate_list(name: &'static str, list: &[String]) -> Result<(), LexiconError> {
    if list.is_empty() {
        return Err(LexiconError::EmptyList(name));
    }
    for entry in list {
        if entry.is_empty() {
            return Err(LexiconError::EmptyEntry(name));
        }
        if entry.chars().any(char::is_uppercase) {
            return Err(LexiconError::NotLowercase {
                list: name,
                entry: entry.clone(),
            });
        }
    }
    Ok(())
}
