use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use oll_preview::prelude::*;
use simple_logger::SimpleLogger;

#[derive(Parser)]
#[command(about = "OLL case previews and move notation tools")]
struct Cli {
    /// More logging; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check every case in a data file.
    Validate {
        #[arg(default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
    },
    /// Print each case with its preview diagram.
    Preview {
        #[arg(default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
    },
    /// Print the preview pattern of one algorithm.
    Pattern {
        algorithm: String,
        #[arg(long)]
        json: bool,
    },
    /// Print an algorithm in canonical notation.
    Normalize { algorithm: String },
    /// Print the inverse of an algorithm.
    Invert { algorithm: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init()?;

    match cli.command {
        Command::Validate { data } => run_validate(data),
        Command::Preview { data } => run_preview(data),
        Command::Pattern { algorithm, json } => {
            let pattern = preview_pattern(&algorithm)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pattern)?);
            } else {
                println!("{}", pattern);
            }
            Ok(())
        }
        Command::Normalize { algorithm } => {
            println!("{}", normalize(&algorithm)?);
            Ok(())
        }
        Command::Invert { algorithm } => {
            println!("{}", invert(&algorithm)?);
            Ok(())
        }
    }
}

fn run_validate(path: PathBuf) -> anyhow::Result<()> {
    let data = CaseData::load(&path)?;
    let report = validate(&data, &path.display().to_string());

    if !report.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &report.warnings {
            eprintln!("- {}", warning);
        }
    }

    if !report.is_ok() {
        eprintln!("Validation errors:");
        for error in &report.errors {
            eprintln!("- {}", error);
        }
        anyhow::bail!("{} validation error(s)", report.errors.len());
    }

    println!(
        "Validated {} OLL cases from {}.",
        report.validated,
        path.display()
    );
    Ok(())
}

fn run_preview(path: PathBuf) -> anyhow::Result<()> {
    let data = CaseData::load(&path)?;
    let mut cache: HashMap<String, Pattern> = HashMap::new();

    for group in &data.groups {
        println!("== {}", group.name);
        for bad in &group.malformed {
            log::warn!("Skipping case {} in \"{}\": {}", bad.position, group.name, bad.error);
        }
        for case in &group.cases {
            let algorithm = case.preview_algorithm();
            let pattern = *cache
                .entry(algorithm)
                .or_insert_with_key(|algorithm| Pattern::preview_or_fallback(algorithm));

            let setup = case.setup_sequence();
            println!("{}", case.title());
            println!(
                "  Setup: {}",
                if setup.is_empty() { "None" } else { setup.as_str() }
            );
            println!("  Standard Alg: {}", case.solution_sequence());
            println!(
                "  Notation: {}  probability = {}",
                case.notation_label(),
                case.probability_label()
            );
            for line in pattern.to_string().lines() {
                println!("    {}", line);
            }
        }
        println!();
    }
    Ok(())
}
