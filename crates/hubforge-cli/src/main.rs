//! hubforge CLI - annotation-task schema inference for datasets.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Infer {
            file,
            subset,
            labels,
            json,
        } => commands::infer::run(file, subset, labels, json),
        Commands::Subsets { file, json } => commands::subsets::run(file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
