use aoc_tools::cli::{self, scaffold::ScaffoldArgs};
use clap::Parser;

fn main() {
    cli::init_logging();
    let args = ScaffoldArgs::parse();
    std::process::exit(cli::scaffold::run(args));
}
