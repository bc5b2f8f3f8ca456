use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::bench::{discover, run_benchmark};
use crate::display::{json_report, markdown_table, outcome_line};
use crate::models::BenchRecord;

use super::ProjectArgs;

#[derive(Debug, Parser)]
#[command(name = "aoc-bench")]
#[command(about = "Benchmark all Advent of Code solutions", long_about = None)]
pub struct BenchArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output as Markdown table
    #[arg(short, long)]
    pub markdown: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Filter by year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Solutions binary (defaults to <root>/build/aoc)
    #[arg(long)]
    pub bin: Option<PathBuf>,

    /// Per-solution timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,
}

pub fn run(args: BenchArgs) -> i32 {
    let layout = args.project.layout();
    let binary = args.bin.clone().unwrap_or_else(|| layout.binary_path());

    if !binary.exists() {
        println!("❌ Build not found. Run: make build");
        return 1;
    }

    let mut solutions = match discover(&layout) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to scan {}: {}", layout.src_root().display(), e);
            return 1;
        }
    };
    if let Some(year) = args.year {
        solutions.retain(|id| id.year == year);
    }

    if solutions.is_empty() {
        println!("No solutions found.");
        return 0;
    }

    let timeout = Duration::from_secs(args.timeout);
    let mut records = Vec::with_capacity(solutions.len());
    for id in solutions {
        print!("Running {}... ", id);
        let _ = io::stdout().flush();

        let result = run_benchmark(&binary, id, timeout);
        println!("{}", outcome_line(&result));
        records.push(BenchRecord { id, result });
    }

    if args.markdown {
        println!();
        print!("{}", markdown_table(&records));
    }

    if args.json {
        match json_report(&records) {
            Ok(json) => {
                println!();
                println!("{}", json);
            }
            Err(e) => eprintln!("Failed to serialize results: {}", e),
        }
    }

    0
}
