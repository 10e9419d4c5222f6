//! Neighborly CLI - user directory enrichment in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
mod output;

use commands::{nearest, posts, run, titles};

/// Neighborly - join, check, and map a user directory
#[derive(Parser)]
#[command(name = "nbr", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every data-touching command
#[derive(Args)]
struct SourceArgs {
    /// Record source to use (http, demo)
    #[arg(long, default_value = "http")]
    source: String,
    /// Override the users endpoint for this run
    #[arg(long)]
    users_url: Option<String>,
    /// Override the posts endpoint for this run
    #[arg(long)]
    posts_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full enrichment pipeline and print the report
    Run {
        #[command(flatten)]
        source: SourceArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch and join, then show post counts per user
    Posts {
        #[command(flatten)]
        source: SourceArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check post titles for uniqueness
    Titles {
        #[command(flatten)]
        source: SourceArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute each user's nearest neighbor
    Nearest {
        #[command(flatten)]
        source: SourceArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run_cli(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { source, json } => {
            run::run(&source.source, source.users_url, source.posts_url, json)
        }
        Commands::Posts { source, json } => {
            posts::run(&source.source, source.users_url, source.posts_url, json)
        }
        Commands::Titles { source, json } => {
            titles::run(&source.source, source.users_url, source.posts_url, json)
        }
        Commands::Nearest { source, json } => {
            nearest::run(&source.source, source.users_url, source.posts_url, json)
        }
    }
}
