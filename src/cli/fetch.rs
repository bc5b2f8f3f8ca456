use chrono::Utc;
use clap::Parser;

use crate::fetch::{fetch_to_file, time_until_unlock, FetchError, FetchStatus, HttpSource, Session};
use crate::models::SolutionId;

use super::ProjectArgs;

#[derive(Debug, Parser)]
#[command(name = "aoc-fetch")]
#[command(about = "Fetch Advent of Code puzzle input", long_about = None)]
pub struct FetchArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Year (e.g., 2024)
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Day (1-25)
    #[arg(allow_negative_numbers = true)]
    pub day: i32,

    /// Overwrite existing
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(args: FetchArgs) -> i32 {
    let id = match SolutionId::new(args.year, args.day) {
        Ok(id) => id,
        Err(e) => {
            println!("{}", e);
            return 1;
        }
    };
    let layout = args.project.layout();

    match fetch_to_file(&layout, &HttpSource, || Session::load(&layout), id, args.force) {
        Ok(FetchStatus::AlreadyExists(path)) => {
            println!("  Input already exists: {}", path.display());
            println!("  Use --force to overwrite");
            0
        }
        Ok(FetchStatus::Saved(path)) => {
            println!("✓ Saved to {}", path.display());
            0
        }
        Err(e) => {
            report_error(&e, id);
            1
        }
    }
}

fn report_error(error: &FetchError, id: SolutionId) {
    println!("❌ {}", error);
    match error {
        FetchError::MissingSession => {
            println!("   Get your session cookie from adventofcode.com");
            println!("   Add to .env: AOC_SESSION=your_session_cookie");
        }
        FetchError::NotAvailable { .. } => {
            if let Some(wait) = time_until_unlock(id, Utc::now()) {
                println!("   Unlocks in {}h {}m", wait.num_hours(), wait.num_minutes() % 60);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let parsed = FetchArgs::parse_from(["aoc-fetch", "2024", "5", "-f"]);
        assert_eq!(parsed.year, 2024);
        assert_eq!(parsed.day, 5);
        assert!(parsed.force);
    }

    #[test]
    fn test_invalid_day_exits_1() {
        let tmp = tempfile::TempDir::new().unwrap();
        let parsed = FetchArgs::parse_from([
            "aoc-fetch",
            "--root",
            tmp.path().to_str().unwrap(),
            "2024",
            "0",
        ]);
        assert_eq!(run(parsed), 1);
        assert!(!tmp.path().join("data").exists());
    }

    #[test]
    fn test_existing_input_exits_0_without_session() {
        let tmp = tempfile::TempDir::new().unwrap();
        let input = tmp.path().join("data/2024/day05/input.txt");
        std::fs::create_dir_all(input.parent().unwrap()).unwrap();
        std::fs::write(&input, "kept").unwrap();

        let parsed = FetchArgs::parse_from([
            "aoc-fetch",
            "--root",
            tmp.path().to_str().unwrap(),
            "2024",
            "5",
        ]);
        assert_eq!(run(parsed), 0);
        assert_eq!(std::fs::read_to_string(&input).unwrap(), "kept");
    }
}
