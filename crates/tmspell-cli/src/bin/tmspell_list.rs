// tmspell-list: print the unknown words of one or more documents.
//
// Each input is scanned with a dialect filter (given with --type or guessed
// from the file extension). Every word the filter offers is checked against
// a word list, the personal dictionary and the session; unknown words are
// printed to stdout, one per line, in the order they occur.
//
// Usage:
//   tmspell-list -w WORDLIST [-p PERSONAL] [-c CONFIG] [-t TYPE] [FILE...]

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tmspell_cli::{CommonArgs, filter_for, init_logging, load_config, open_input, scan_document};
use tmspell_dict::{SpellSession, WordListSpeller};

/// Print the misspelled words of the input, one per line.
#[derive(Debug, Parser)]
#[command(name = "tmspell-list", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Word list of correctly spelled words (whitespace separated)
    #[arg(short, long, value_name = "FILE")]
    words: PathBuf,

    /// Personal dictionary; missing files are treated as empty
    #[arg(short, long, value_name = "FILE")]
    personal: Option<PathBuf>,

    /// Words shorter than this are never reported
    #[arg(short = 'W', long, value_name = "N", default_value_t = 0)]
    min_word_length: usize,

    /// Report each unknown word only once
    #[arg(short, long)]
    unique: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    let config = load_config(cli.common.config.as_deref())?;
    let speller = WordListSpeller::from_file(&cli.words)
        .with_context(|| format!("failed to load word list {}", cli.words.display()))?;
    log::info!("{} words in {}", speller.len(), cli.words.display());

    let mut session = SpellSession::new(speller).with_min_word_length(cli.min_word_length);
    if let Some(personal) = &cli.personal {
        if let Err(err) = session.load_personal(personal) {
            log::warn!("{err}");
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for input in cli.common.inputs() {
        let mut filter = filter_for(&cli.common, &config, input);
        let reader = open_input(input)?;
        scan_document(reader, &mut filter, |word| {
            if session.check_word(&word.text) {
                return Ok(());
            }
            writeln!(out, "{}", word.text)?;
            if cli.unique {
                session.add_session_word(&word.text);
            }
            Ok(())
        })?;
    }
    out.flush()?;
    Ok(())
}
