//! pipehook - pipeline hook plugin CLI
//!
//! Local discovery and task build against the built-in catalog, without a
//! running daemon.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("pipehook=info".parse()?))
        .init();

    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Describe(cmd) => commands::describe::execute(cmd),
        Commands::Build(cmd) => commands::build::execute(cmd),
        Commands::Version => {
            println!("pipehook {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
