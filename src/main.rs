//! Main entry point for line-comparer CLI

use clap::Parser;
use line_comparer::cli::Cli;
use line_comparer::commands::execute;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments; a missing input file is rejected here
    let cli = Cli::parse();

    if let Err(e) = execute(&cli.options(), &cli.infile) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
