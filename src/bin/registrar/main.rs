//! Registrar CLI - demo driver for the in-memory student roster

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use registrar::util::{ColorChoice, Shell};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("registrar=debug")
    } else {
        EnvFilter::new("registrar=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let shell = Shell::from_flags(cli.quiet, cli.verbose, color, cli.json);

    // Execute command
    match cli.command {
        Commands::Demo => commands::demo::execute(&shell),
        Commands::Rank => commands::rank::execute(&shell),
        Commands::Roster(args) => commands::roster::execute(args, &shell),
        Commands::Stats => commands::stats::execute(&shell),
        Commands::Search(args) => commands::search::execute(args, &shell),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
