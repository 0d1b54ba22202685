use std::fs;
use std::io::{self, Read};
use std::process;

use preslov_core::classifier::classify;
use preslov_core::lexicon::{self, Lexicon};
use preslov_core::{to_cyrillic, to_latin, Direction};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Convert a file (or stdin) and print the result to stdout.
pub fn convert_cmd(direction: Direction, file: Option<&str>, lexicon_file: Option<&str>) {
    load_custom_lexicon(lexicon_file);
    let text = read_input(file);
    let converted = match direction {
        Direction::ToCyrillic => to_cyrillic(&text),
        Direction::ToLatin => to_latin(&text),
    };
    println!("{converted}");
}

/// Print the classifier verdict and the rule that fired, one word per
/// line.
pub fn classify_cmd(words: &[String], lexicon_file: Option<&str>) {
    load_custom_lexicon(lexicon_file);
    let lexicon = Lexicon::global();
    for word in words {
        let verdict = classify(lexicon, word);
        let script = if verdict.is_foreign() {
            "foreign"
        } else {
            "domestic"
        };
        println!("{word}: {script} ({verdict})");
    }
}

/// Dump the embedded default lexicon TOML, e.g. as a starting point for
/// a customized one.
pub fn lexicon_cmd() {
    print!("{}", lexicon::default_toml());
}

fn load_custom_lexicon(lexicon_file: Option<&str>) {
    if let Some(path) = lexicon_file {
        let content = die!(fs::read_to_string(path), "Error reading lexicon: {}");
        die!(lexicon::init_custom(content), "Invalid lexicon: {}");
    }
}

fn read_input(file: Option<&str>) -> String {
    match file {
        Some(path) => die!(fs::read_to_string(path), "Error reading input: {}"),
        None => {
            let mut text = String::new();
            die!(
                io::stdin().read_to_string(&mut text),
                "Error reading stdin: {}"
            );
            text
        }
    }
}
