use std::io::Read;
use std::process::ExitCode;
use clap::Parser;
use log::{debug, error, warn};
use hyph_engine::prelude::*;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints words with their hyphenation points", long_about = None)]
struct Parameters {
    /// Words to hyphenate; read from stdin if none are given
    words: Vec<String>,

    /// Digram threshold (default 160)
    #[clap(short, long)]
    threshold: Option<i32>,

    /// File of exception words, e.g. `hy-phen-ation`
    #[clap(short, long)]
    exceptions: Option<String>,

    /// File of control lines (`.hw`, `.ht`, `.hy`, `.nh`) to apply first
    #[clap(short, long)]
    requests: Option<String>,

    /// Suffix table to use instead of the standard one
    #[clap(short, long)]
    suffixes: Option<String>,

    /// Do not strip suffixes
    #[clap(long, default_value_t = false)]
    no_suffixes: bool,

    /// Size of the exception word buffer, in bytes
    #[clap(long)]
    capacity: Option<usize>,

    /// Hyphenation mode, as for `.hy`
    #[clap(short, long)]
    mode: Option<i32>,

    /// Print break positions instead of the hyphenated word
    #[clap(short, long, default_value_t = false)]
    positions: bool,

    /// verbose
    #[clap(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    let params = Parameters::parse();
    let level = if params.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::builder().filter_level(level).init();
    match run(params) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },
    #[error("{path}: {source}")]
    Config { path: String, #[source] source: HyphError },
}

fn read(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io { path: path.to_string(), source })
}

fn configure(params: &Parameters) -> Result<HyphenationConfig, CliError> {
    let mut config = HyphenationConfig::new();
    if let Some(capacity) = params.capacity {
        config = config.with_exception_capacity(capacity);
    }
    if params.no_suffixes {
        config.set_suffixes(SuffixTable::empty().into());
    } else if let Some(path) = &params.suffixes {
        let table = SuffixTable::from_notation(&read(path)?)
            .map_err(|source| CliError::Config { path: path.clone(), source })?;
        debug!("{path}: {} suffixes", table.len());
        config.set_suffixes(table.into());
    }
    if let Some(path) = &params.requests {
        for (i, line) in read(path)?.lines().enumerate() {
            match config.apply_request(line) {
                Ok(true) => (),
                Ok(false) => debug!("{path}:{}: ignored: {line}", i + 1),
                Err(e) => warn!("{path}:{}: {e}", i + 1),
            }
        }
    }
    if let Some(path) = &params.exceptions {
        match config.load_exceptions(&read(path)?) {
            Ok(n) => debug!("{path}: {n} exception words"),
            // already reported; the words that fit are kept
            Err(HyphError::DictionaryFull { .. }) => (),
            Err(source) => return Err(CliError::Config { path: path.clone(), source }),
        }
    }
    if params.threshold.is_some() {
        config.set_threshold(params.threshold);
    }
    if let Some(mode) = params.mode {
        config.set_mode(HyphenationMode::new(mode));
    }
    Ok(config)
}

fn run(params: Parameters) -> Result<(), CliError> {
    let config = configure(&params)?;
    let words = if params.words.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)
            .map_err(|source| CliError::Io { path: "<stdin>".to_string(), source })?;
        input.split_whitespace().map(str::to_string).collect()
    } else {
        params.words
    };
    for word in &words {
        if params.positions {
            let breaks = word_breaks(word, &config).iter().map(|p| p.to_string()).collect::<Vec<_>>();
            println!("{word}\t{}", breaks.join(" "));
        } else {
            println!("{}", mark_breaks(word, &config, "-"));
        }
    }
    Ok(())
}
