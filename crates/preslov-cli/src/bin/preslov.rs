use clap::{Parser, Subcommand};

use preslov_cli::commands::convert_ops::{classify_cmd, convert_cmd, lexicon_cmd};
use preslov_cli::trace;
use preslov_core::Direction;

#[derive(Parser)]
#[command(name = "preslov", about = "Serbian Latin/Cyrillic transliteration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Latin text to Cyrillic
    Cyr {
        /// Input file (stdin when omitted)
        file: Option<String>,
        /// Replace the built-in word lists with a TOML file
        #[arg(long)]
        lexicon: Option<String>,
    },
    /// Convert Cyrillic text to Latin
    Lat {
        /// Input file (stdin when omitted)
        file: Option<String>,
    },
    /// Explain the foreign-word verdict for each given word
    Classify {
        /// Words to classify
        #[arg(required = true)]
        words: Vec<String>,
        /// Replace the built-in word lists with a TOML file
        #[arg(long)]
        lexicon: Option<String>,
    },
    /// Print the embedded default lexicon TOML
    Lexicon,
}

fn main() {
    trace::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Cyr { file, lexicon } => {
            convert_cmd(Direction::ToCyrillic, file.as_deref(), lexicon.as_deref())
        }
        Command::Lat { file } => convert_cmd(Direction::ToLatin, file.as_deref(), None),
        Command::Classify { words, lexicon } => classify_cmd(&words, lexicon.as_deref()),
        Command::Lexicon => lexicon_cmd(),
    }
}
