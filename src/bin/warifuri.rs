//! Aligns words with their readings line by line.
//!
//! Each input line holds a word and its reading separated by a tab, such as `今日は	きょう..は`.
//! Blank lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use warifuri::{Aligner, Furigana, FuriganaError, Record};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// HTML ruby tags.
    Ruby,
    /// Anki-style brackets, such as 読[よ]む.
    Brackets,
    /// One tab separated segment and reading per line, with a blank line after each word.
    Pairs,
}

#[derive(Parser, Debug)]
#[clap(name = "warifuri", version, about = "Maps furigana to words given their separated readings")]
struct Args {
    /// Input file. Reads from stdin when omitted.
    input: Option<PathBuf>,

    /// Character separating the spans of a reading.
    #[clap(short, long, default_value_t = Aligner::DEFAULT_SEPARATOR)]
    separator: char,

    /// Output format.
    #[clap(short, long, value_enum, default_value_t = Format::Ruby)]
    format: Format,

    /// Fails on malformed lines instead of skipping them.
    #[clap(long)]
    strict: bool,

    /// Logs more, can be repeated.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), FuriganaError> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let aligner = Aligner::new().with_separator(args.separator)?;
    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(std::io::stdin().lock())),
    };
    let mut out = BufWriter::new(std::io::stdout().lock());

    let mut aligned = 0;
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let record = match Record::parse(&line, i + 1) {
            Ok(Some(record)) => record,
            Ok(None) => continue,
            Err(err) if !args.strict => {
                tracing::warn!("skipping: {err}");
                continue;
            }
            Err(err) => return Err(err),
        };
        let furigana = aligner.tokenize(record.written, record.reading);
        write_furigana(&mut out, &furigana, args.format)?;
        aligned += 1;
    }
    out.flush()?;
    tracing::info!(aligned, "done");

    Ok(())
}

fn write_furigana<W: Write>(out: &mut W, furigana: &Furigana, format: Format) -> std::io::Result<()> {
    match format {
        Format::Ruby => writeln!(out, "{furigana}"),
        Format::Brackets => writeln!(out, "{}", furigana.brackets()),
        Format::Pairs => {
            for token in furigana {
                writeln!(out, "{}\t{}", token.written, token.reading)?;
            }
            writeln!(out)
        }
    }
}
