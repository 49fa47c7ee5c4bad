//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};

/// Registrar - an in-memory student roster with enrollment tracking
#[derive(Parser)]
#[command(name = "registrar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full roster walkthrough on the sample data
    Demo,

    /// Print the GPA ranking
    Rank,

    /// Print the roster for a course
    Roster(RosterArgs),

    /// Print aggregate roster statistics
    Stats,

    /// Search students by name substring
    Search(SearchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct RosterArgs {
    /// Course name, e.g. CS101
    pub course: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Case-insensitive name substring; empty matches everyone
    #[arg(default_value = "")]
    pub query: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
