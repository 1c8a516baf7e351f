use clap::Parser;
use std::path::PathBuf;

use rowlife::{io_utils::CliError, Config, Generations, Pattern, TransitionTable};

/// Print successive generations of one line, aligned by offset.
#[derive(Parser)]
struct Args {
    /// Initial line, e.g. "##..#"
    line: String,
    /// Number of generations to print after the initial line
    #[arg(long, default_value_t = 16)]
    generations: usize,
    /// Symbol for a filled cell
    #[arg(long, default_value_t = '#')]
    filled: char,
    /// Symbol for a blank cell
    #[arg(long, default_value_t = '.')]
    blank: char,
    /// Optional CSV output path with generation, offset and runs
    #[arg(long)]
    csv: Option<PathBuf>,
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
        filled: args.filled,
        blank: args.blank,
        ..Config::default()
    };
    config
        .validate()
        .map_err(|e| CliError::rowlife("invalid options", e))?;
    let initial = Pattern::parse_with(&args.line, &config)
        .map_err(|e| CliError::rowlife("parsing line", e))?;

    let table = TransitionTable::compute();
    let mut history = vec![initial.clone()];
    history.extend(Generations::new(initial, &table).take(args.generations));

    let left = history
        .iter()
        .filter(|p| !p.is_empty())
        .map(Pattern::offset)
        .min()
        .unwrap_or(0);
    for (generation, p) in history.iter().enumerate() {
        let pad = if p.is_empty() {
            0
        } else {
            (p.offset() - left) as usize
        };
        println!(
            "{:>4} {}{}",
            generation,
            args.blank.to_string().repeat(pad),
            p.render(args.filled, args.blank)
        );
    }

    if let Some(path) = &args.csv {
        let mut wtr = csv::Writer::from_path(path)
            .map_err(|e| CliError::io("creating csv", path, e.into()))?;
        wtr.write_record(["generation", "offset", "runs"])?;
        for (generation, p) in history.iter().enumerate() {
            let runs: Vec<String> = p.runs().iter().map(usize::to_string).collect();
            wtr.write_record([
                generation.to_string(),
                p.offset().to_string(),
                runs.join(" "),
            ])?;
        }
        wtr.flush()?;
    }

    Ok(())
}
