use aoc_tools::cli::{self, bench::BenchArgs};
use clap::Parser;

fn main() {
    cli::init_logging();
    let args = BenchArgs::parse();
    std::process::exit(cli::bench::run(args));
}
