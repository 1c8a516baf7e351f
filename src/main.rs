use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use rowlife::{
    classify_lines_with, io_utils::CliError, read_lines, Config, RowlifeError, TransitionTable,
    DEFAULT_MAX_GENERATIONS,
};

/// Classify each line of a pattern file as vanishing, blinking, gliding or other.
#[derive(Parser)]
#[command(name = "rowlife")]
struct Args {
    /// Input file, one pattern per line
    #[arg(default_value = "patterns.txt")]
    input: PathBuf,
    /// Generations to evolve before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_GENERATIONS)]
    max_generations: usize,
    /// Symbol for a filled cell
    #[arg(long, default_value_t = '#')]
    filled: char,
    /// Symbol for a blank cell
    #[arg(long, default_value_t = '.')]
    blank: char,
    /// Optional JSON output path for per-line results
    #[arg(long)]
    json: Option<PathBuf>,
    /// Optional CSV output path for per-line results
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Only print totals per outcome
    #[arg(long)]
    summary: bool,
    /// Show a progress bar on stderr
    #[arg(long)]
    progress: bool,
    /// Print total runtime to stderr
    #[arg(long)]
    timing: bool,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config {
        max_generations: args.max_generations,
        filled: args.filled,
        blank: args.blank,
    };
    config
        .validate()
        .map_err(|e| CliError::rowlife("invalid options", e))?;

    let lines = read_lines(&args.input).map_err(|e| match e {
        RowlifeError::Io(io) => CliError::io("reading input file", &args.input, io),
        other => CliError::rowlife("reading input file", other),
    })?;

    let bar = if args.progress {
        let bar = ProgressBar::new(lines.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} lines ({elapsed})")
                .map_err(|e| CliError::new(format!("progress template: {e}")))?,
        );
        Some(bar)
    } else {
        None
    };

    let table = TransitionTable::compute();
    let batch = classify_lines_with(&lines, &table, &config, |report| {
        if let Some(bar) = &bar {
            bar.inc(1);
        }
        if !args.summary {
            println!("{}", report.label());
        }
    })
    .map_err(|e| CliError::rowlife("classification failed", e))?;
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if let Some(path) = &args.csv {
        let f = File::create(path).map_err(|e| CliError::io("creating csv", path, e))?;
        let mut wtr = csv::Writer::from_writer(f);
        for record in batch.records() {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
    }
    if let Some(path) = &args.json {
        let mut f = File::create(path).map_err(|e| CliError::io("creating json", path, e))?;
        serde_json::to_writer_pretty(&mut f, &batch.records())?;
        f.write_all(b"\n")?;
    }

    if args.summary {
        let total = batch.reports.len().max(1);
        println!("#lines: {}", batch.reports.len());
        for (outcome, n) in batch.tallies() {
            println!(
                "#{}: {} ({:.1}%)",
                outcome,
                n,
                100.0 * n as f64 / total as f64
            );
        }
        println!("#errors: {}", batch.errors());
    }

    if args.timing {
        eprintln!("Runtime (s) = {}", batch.elapsed.as_secs_f64());
    }

    Ok(())
}
