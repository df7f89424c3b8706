//! Lootscope CLI.
//!
//! A developer harness around the `lootscope` library: scan scripted
//! scene fixtures and manage tracker configuration files without a game
//! host attached. Log verbosity follows `RUST_LOG`.

mod commands;
mod error;
mod scene;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lootscope", version, about = "World-scanning loot tracker, offline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan a scene fixture and print matching points of interest
    Scan(commands::scan::ScanArgs),

    /// Manage tracker configuration files
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
