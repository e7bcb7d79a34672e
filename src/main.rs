use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use structopt::StructOpt;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use spell_tools::{Dictionary, Error, FileFormat, SuggestionEngine};

/// Suggest correctly spelled words one edit away from each input word.
#[derive(StructOpt)]
#[structopt(name = "spell-tools")]
struct Cli {
    /// The dictionary file, one word per line unless a delimiter is given
    #[structopt(parse(from_os_str))]
    dictionary: PathBuf,
    /// Words to check; read from stdin when none are given
    words: Vec<String>,
    /// Column delimiter of the dictionary file
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Column holding the word when a delimiter is set
    #[structopt(short = "c", long)]
    word_column: Option<usize>,
    /// Print each result as a JSON array
    #[structopt(long)]
    json: bool,
    /// Log more (-v info, -vv debug, -vvv trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl Cli {
    fn file_format(&self) -> FileFormat {
        match (self.delimiter, self.word_column) {
            (Some(delimiter), Some(column)) =>
                FileFormat::builder().delimiter(delimiter).word_column(column).build(),
            (Some(delimiter), None) => FileFormat::builder().delimiter(delimiter).build(),
            (None, column) => {
                if column.is_some() {
                    warn!("--word-column has no effect without --delimiter");
                }
                FileFormat::builder().build()
            }
        }
    }

    fn level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn report<W: Write>(out: &mut W, engine: &SuggestionEngine<Dictionary>, word: &str, json: bool) -> spell_tools::Result<()> {
    writeln!(out, "===== {}", word)?;
    match engine.suggest(word) {
        Ok(Some(suggestions)) if json => {
            writeln!(out, "{}", serde_json::to_string(&suggestions).map_err(io::Error::from)?)?
        }
        Ok(Some(suggestions)) => suggestions.write_to(out)?,
        Ok(None) if json => writeln!(out, "[]")?,
        Ok(None) => {}
        Err(Error::InvalidInput { word, found }) => {
            warn!(%word, %found, "skipping word that is not lowercase a-z");
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn run(args: &Cli) -> spell_tools::Result<()> {
    let dictionary = Dictionary::from_file(&args.dictionary, &args.file_format())?;
    info!("{} words in dictionary", dictionary.count());

    let engine = SuggestionEngine::new(&dictionary);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let start = Instant::now();

    if args.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            for word in line?.split_whitespace() {
                report(&mut out, &engine, word, args.json)?;
            }
        }
    } else {
        for word in &args.words {
            report(&mut out, &engine, word, args.json)?;
        }
    }

    info!("Suggested in {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn main() {
    let args = Cli::from_args();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("spell-tools: {}", e);
        process::exit(1);
    }
}
