use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{ArgGroup, Parser};
use log::{debug, info};
use seqsearch::hex::{hex, unhex};
use seqsearch::predicate::none_of;
use seqsearch::{Algorithm, LogInspector, NoInspector, Searcher};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Algo {
    Bm,
    Bmh,
    Kmp,
    Naive,
}

impl From<Algo> for Algorithm {
    fn from(algo: Algo) -> Self {
        match algo {
            Algo::Bm => Algorithm::BoyerMoore,
            Algo::Bmh => Algorithm::BoyerMooreHorspool,
            Algo::Kmp => Algorithm::KnuthMorrisPratt,
            Algo::Naive => Algorithm::Naive,
        }
    }
}

/// Example:
/// time cargo run --release -- -t data/ipsum.txt -t data/dna.txt --pattern "TCGC" -a bm --measure-time
/// cargo run -- -t firmware.bin --hex-pattern "DEADBEEF" -a bmh --all
/// RUST_LOG=debug cargo run -- -t data/ipsum.txt --pattern "Lorem" -a kmp --dump-tables
#[derive(Debug, clap::Parser)]
#[command(
    name = "seqsearch",
    about = "Run exact substring search algorithms on one pattern and one or more texts",
    group(ArgGroup::new("pattern_source").required(true).multiple(false))
)]
struct Cli {
    #[arg(short, long, value_enum)]
    algo: Algo,

    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(long, group = "pattern_source")]
    pattern: Option<String>,

    #[arg(long = "pattern-file", value_name = "PATTERN_FILE", group = "pattern_source")]
    pattern_file: Option<PathBuf>,

    /// Pattern given as hex digits, two per byte
    #[arg(long = "hex-pattern", value_name = "HEX", group = "pattern_source")]
    hex_pattern: Option<String>,

    /// Report every (overlapping) match instead of only the first
    #[arg(long)]
    all: bool,

    /// Log the tables built from the pattern at debug level
    #[arg(long)]
    dump_tables: bool,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Measure and print execution time for the search algorithm
    #[arg(long)]
    measure_time: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let pattern = load_pattern(&cli)?;
    if pattern.is_empty() {
        return Err("Pattern must not be empty".into());
    }

    let algorithm = Algorithm::from(cli.algo);
    let matcher = if cli.dump_tables {
        algorithm.build_inspected(&pattern[..], &mut LogInspector)
    } else {
        algorithm.build_inspected(&pattern[..], &mut NoInspector)
    };
    info!("built {} matcher for {} byte pattern", algorithm.name(), pattern.len());

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithm={}, pattern-length={}, pattern={}",
        algorithm.name(),
        pattern.len(),
        display_pattern(&pattern)
    )?;

    for text_path in cli.texts.iter() {
        let text = load_bytes(text_path)?;
        debug!("loaded {:?} ({} bytes)", text_path, text.len());

        let (matches, duration) = run_search(&cli, &*matcher, &text);

        writeln!(out, "text={:?}", text_path)?;

        if let Some(d) = duration {
            writeln!(out, "execution_time: {}ns", d.as_nanos())?;
        }

        writeln!(out, "matches: {:?}", matches)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Printable patterns are shown as-is, anything else as hex.
fn display_pattern(pattern: &[u8]) -> String {
    if none_of(pattern, |b| !(b.is_ascii_graphic() || **b == b' ')) {
        format!("{:?}", String::from_utf8_lossy(pattern))
    } else {
        format!("0x{}", hex(pattern))
    }
}

fn load_pattern(cli: &Cli) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(ref pat) = cli.pattern {
        Ok(pat.as_bytes().to_vec())
    } else if let Some(ref path) = cli.pattern_file {
        load_bytes(path)
    } else if let Some(ref digits) = cli.hex_pattern {
        Ok(unhex::<u8>(digits.trim())?)
    } else {
        Err("One of --pattern, --pattern-file or --hex-pattern must be provided".into())
    }
}

fn load_bytes(path: &PathBuf) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    if path.as_os_str() == "-" {
        io::stdin().read_to_end(&mut buf)?;
    } else {
        File::open(path)?.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

fn run_search(
    cli: &Cli,
    matcher: &dyn Searcher<u8>,
    text: &[u8],
) -> (Vec<usize>, Option<Duration>) {
    let start = if cli.measure_time {
        Some(Instant::now())
    } else {
        None
    };

    let result = if cli.all {
        matcher.find_all(text)
    } else {
        matcher.find(text).into_iter().collect()
    };

    let duration = start.map(|s| s.elapsed());

    (result, duration)
}
