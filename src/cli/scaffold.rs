use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::models::SolutionId;
use crate::scaffold::{run_fetcher, scaffold, FileAction, FileEntry};

use super::ProjectArgs;

const FETCHER_NAME: &str = "aoc-fetch";

#[derive(Debug, Parser)]
#[command(name = "aoc-scaffold")]
#[command(about = "Scaffold a new Advent of Code day", long_about = None)]
pub struct ScaffoldArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Year (e.g., 2024)
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Day (1-25)
    #[arg(allow_negative_numbers = true)]
    pub day: i32,

    /// Don't fetch input
    #[arg(long)]
    pub no_fetch: bool,
}

pub fn run(args: ScaffoldArgs) -> i32 {
    let id = match SolutionId::new(args.year, args.day) {
        Ok(id) => id,
        Err(e) => {
            println!("{}", e);
            return 1;
        }
    };
    let layout = args.project.layout();

    let report = match scaffold(&layout, id) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    };

    print_entry(&report.header);
    print_entry(&report.source);
    if report.example.action == FileAction::Created {
        print_entry(&report.example);
    }

    if !args.no_fetch {
        match fetcher_path() {
            Some(fetcher) => {
                println!();
                println!("Fetching input for {} Day {}...", id.year, id.day);
                match run_fetcher(&fetcher, &layout, id) {
                    Ok(status) if status.success() => {}
                    Ok(status) => println!("Fetch did not complete ({})", status),
                    Err(e) => println!("Failed to run {}: {}", fetcher.display(), e),
                }
            }
            None => println!("  {} not found, skipping input fetch", FETCHER_NAME),
        }
    }

    println!();
    println!("🎄 Scaffolded {} Day {}", id.year, id.day);
    println!("   Edit: {}", report.source.path.display());
    println!("   Example: {}", report.example.path.display());
    println!();
    println!("   Build: make build");
    println!("   Run:   make run YEAR={} DAY={}", id.year, id.day);

    0
}

fn print_entry(entry: &FileEntry) {
    match entry.action {
        FileAction::Created => println!("✓ Created {}", entry.path.display()),
        FileAction::Skipped => println!("  Skipped {} (exists)", entry.path.display()),
    }
}

/// The fetcher binary installed next to this one.
fn fetcher_path() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let path = exe.with_file_name(format!("{}{}", FETCHER_NAME, env::consts::EXE_SUFFIX));
    path.is_file().then_some(path)
}
