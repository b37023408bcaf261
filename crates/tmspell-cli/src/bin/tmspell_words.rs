// tmspell-words: show which words a filter offers for checking.
//
// Output, one word per line:
//   LINE:BEGIN-END<TAB>WORD
// where LINE is 1-based and BEGIN/END are character offsets into the line.
// With --plain only the words are printed.
//
// Usage:
//   tmspell-words [-c CONFIG] [-t TYPE] [--plain] [FILE...]

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tmspell_cli::{CommonArgs, filter_for, init_logging, load_config, open_input, scan_document};

/// Print the words a document filter yields, with their positions.
#[derive(Debug, Parser)]
#[command(name = "tmspell-words", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print only the words, without positions
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    let config = load_config(cli.common.config.as_deref())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for input in cli.common.inputs() {
        let mut filter = filter_for(&cli.common, &config, input);
        let reader = open_input(input)?;
        scan_document(reader, &mut filter, |word| {
            if cli.plain {
                writeln!(out, "{}", word.text)?;
            } else {
                writeln!(
                    out,
                    "{}:{}-{}\t{}",
                    word.line, word.span.begin, word.span.end, word.text
                )?;
            }
            Ok(())
        })?;
    }
    out.flush()?;
    Ok(())
}
