// tmspell-cli: shared utilities for the command-line tools.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tmspell_core::{FilterType, WordSpan};
use tmspell_filter::{Filter, FilterConfig, new_filter};

/// Environment variable naming a default configuration file.
pub const CONFIG_ENV: &str = "TMSPELL_CONFIG";

/// Options shared by every tool: input files, filter selection, logging.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Input files (default: stdin; `-` also reads stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Filter configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Document type: plain, tex, sgml (html) or nroff.
    /// Guessed from each file's extension when not given.
    #[arg(short = 't', long = "type", value_name = "TYPE", value_parser = parse_filter_type)]
    pub filter_type: Option<FilterType>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// The files to read, with `None` standing for stdin.
    pub fn inputs(&self) -> Vec<Option<&Path>> {
        if self.files.is_empty() {
            return vec![None];
        }
        self.files
            .iter()
            .map(|p| (p.as_os_str() != "-").then_some(p.as_path()))
            .collect()
    }

    /// Dialect for `input`: the explicit `--type`, else a guess from the
    /// file extension. Stdin defaults to plain text.
    pub fn filter_type_for(&self, input: Option<&Path>) -> FilterType {
        self.filter_type
            .or_else(|| input.map(FilterType::from_path))
            .unwrap_or_default()
    }
}

/// Parse a `--type` value.
///
/// Unlike [`FilterType::from_name`], an unknown name is an error here so
/// that typos on the command line are reported.
pub fn parse_filter_type(name: &str) -> std::result::Result<FilterType, String> {
    match name.to_ascii_lowercase().as_str() {
        "plain" | "text" => Ok(FilterType::Plain),
        "tex" | "latex" => Ok(FilterType::Tex),
        "sgml" | "html" | "xml" => Ok(FilterType::Sgml),
        "nroff" | "troff" | "man" => Ok(FilterType::Nroff),
        _ => Err(format!(
            "unknown document type '{name}' (expected plain, tex, sgml or nroff)"
        )),
    }
}

/// Initialize logging based on verbosity level.
pub fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Load the filter configuration, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<FilterConfig> {
    let Some(path) = path else {
        log::debug!("no configuration file, using defaults");
        return Ok(FilterConfig::default());
    };
    let config = FilterConfig::from_file(path)
        .with_context(|| format!("failed to load configuration {}", path.display()))?;
    log::info!("loaded configuration from {}", path.display());
    Ok(config)
}

/// Open `input` for line reading; `None` is stdin.
pub fn open_input(input: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match input {
        None => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// A word found while scanning a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    /// 1-based line number.
    pub line: usize,
    pub span: WordSpan,
    pub text: String,
}

/// Run `filter` over every line of `reader`, calling `on_word` for each
/// word it yields.
pub fn scan_document<R, F>(reader: R, filter: &mut Filter, mut on_word: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(FoundWord) -> Result<()>,
{
    filter.restart();
    for (i, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let chars: Vec<char> = line.chars().collect();
        for span in filter.words(&chars) {
            on_word(FoundWord {
                line: i + 1,
                span,
                text: span.text(&chars),
            })?;
        }
    }
    Ok(())
}

/// Build the filter for `input`.
pub fn filter_for(args: &CommonArgs, config: &FilterConfig, input: Option<&Path>) -> Filter {
    let ty = args.filter_type_for(input);
    log::debug!(
        "using {} filter for {}",
        ty.name(),
        input.map_or_else(|| "<stdin>".into(), |p| p.display().to_string())
    );
    new_filter(ty, config)
}
