use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use exbar::sample::{Sample, SampleFormat};
use exbar::search::{run_parallel_search, ParallelConfig};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "exbar")]
#[command(about = "exbar - minimal consistent DFA inference")]
#[command(version)]
struct Args {
    /// Path to the sample file
    file: PathBuf,

    /// Input format of the sample file
    #[arg(short = 'i', long = "format", value_enum, default_value = "abbadingo")]
    format: CliFormat,

    /// Number of worker threads (defaults to the available cores)
    #[arg(long)]
    workers: Option<usize>,

    /// Print extra detail about the run
    #[arg(short, long)]
    verbose: bool,
}

/// CLI input-format selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliFormat {
    /// Line-oriented numeric format
    Abbadingo,
    /// JSON problem-instance document
    Json,
}

impl From<CliFormat> for SampleFormat {
    fn from(cli: CliFormat) -> Self {
        match cli {
            CliFormat::Abbadingo => SampleFormat::Abbadingo,
            CliFormat::Json => SampleFormat::Json,
        }
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading data from {}...", args.file.display());
    let sample = Sample::load(&args.file, args.format.into())?;
    if args.verbose {
        println!(
            "  {} accept words, {} reject words, alphabet size {}",
            sample.accept.len(),
            sample.reject.len(),
            sample.alphabet.len()
        );
    }

    let config = ParallelConfig::default().with_workers_option(args.workers);
    println!("Synthesizing with {} workers...", config.num_workers);

    let start = Instant::now();
    let result =
        run_parallel_search(&sample, &config).ok_or("search ended without a result")?;
    let elapsed = start.elapsed();

    print!("{}", result.outcome.dfa);
    println!("Done in {:.2} seconds.", elapsed.as_secs_f64());
    if args.verbose {
        println!(
            "  solution found by worker {} at bound {}",
            result.worker_id, result.outcome.max_red
        );
    }

    // Self-check: replay every sample word against the discovered automaton.
    let check = result.outcome.dfa.check_sample(&sample);
    println!("The words in S+ that are not accepted by the automaton:");
    for word in &check.false_rejects {
        println!("{}", display_word(word));
    }
    println!("The words in S- that are accepted by the automaton:");
    for word in &check.false_accepts {
        println!("{}", display_word(word));
    }

    Ok(())
}

fn display_word(word: &str) -> &str {
    if word.is_empty() {
        "@epsilon"
    } else {
        word
    }
}
