mod config;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Deserialize;

use config::{Config, OutputFormat};
use guessmatch::{MatchOptions, MatchResult, match_guess};

#[derive(Parser)]
#[command(name = "guessmatch")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a single guess against an answer
    Check {
        guess: String,
        answer: String,
        /// Minimum score (inclusive) to declare a match
        #[arg(long)]
        threshold: Option<f64>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read {"guess": ..., "answer": ...} JSON lines from stdin and
    /// write one result per line
    Batch {
        /// Threshold for lines that do not carry their own
        #[arg(long)]
        threshold: Option<f64>,
    },
}

/// One stdin line in batch mode; `threshold` overrides per pair.
#[derive(Deserialize)]
struct BatchLine {
    guess: String,
    answer: String,
    threshold: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Command::Check {
            guess,
            answer,
            threshold,
            json,
        } => {
            let options = MatchOptions {
                threshold: threshold.unwrap_or(config.threshold),
            };
            let result = match_guess(&guess, &answer, options);
            print_result(&result, json || config.output == OutputFormat::Json)?;
            // Shell callers gate on the exit code
            std::process::exit(if result.matched { 0 } else { 1 });
        }
        Command::Batch { threshold } => {
            run_batch(threshold.unwrap_or(config.threshold))?;
        }
    }

    Ok(())
}

fn print_result(result: &MatchResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else {
        let verdict = if result.matched { "match" } else { "no match" };
        println!("{} (score {:.3}, {})", verdict, result.score, result.method);
    }
    Ok(())
}

fn run_batch(default_threshold: f64) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let pair: BatchLine = match serde_json::from_str(&line) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("skipping malformed line: {}", e);
                continue;
            }
        };
        let options = MatchOptions {
            threshold: pair.threshold.unwrap_or(default_threshold),
        };
        let result = match_guess(&pair.guess, &pair.answer, options);
        serde_json::to_writer(&mut out, &result)?;
        out.write_all(b"\n")?;
    }

    Ok(())
}
