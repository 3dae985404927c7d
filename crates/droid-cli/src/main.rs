//! droid CLI
//!
//! Resolves the declarative build descriptor of a Flutter project's Android
//! wrapper into the configuration consumed by the packager.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Android build descriptor resolver", "droid".green().bold());
            println!();
            println!("Run {} for available commands.", "droid --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve {
            input,
            json,
            output,
        } => commands::run_resolve(&input, json, output.as_deref()),
        Commands::Check { input } => commands::run_check(&input),
        Commands::Keys { json } => commands::run_keys(json),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
