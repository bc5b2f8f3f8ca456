use aoc_tools::cli::{self, fetch::FetchArgs};
use clap::Parser;

fn main() {
    cli::init_logging();
    let args = FetchArgs::parse();
    std::process::exit(cli::fetch::run(args));
}
