//! monopoly - HTTP service for the Monopoly players/games database
//!
//! Subcommands:
//! - `serve`: run the REST API
//! - `migrate`: apply the schema migrations and exit
//!
//! Database settings come from `DB_SERVER`, `DB_PORT`, `DB_DATABASE`,
//! `DB_USER`, and `DB_PASSWORD` (or matching flags); a `.env` file in the
//! working directory is loaded first if present.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "monopoly", version, about = "Monopoly players/games service")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Apply database migrations and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing file is fine; real deployments set the environment directly
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }

    Ok(())
}
