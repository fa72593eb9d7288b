//! HTTP server command
//!
//! Connects the pool, optionally migrates, and serves until Ctrl+C/SIGTERM.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use monopoly_server::db::{create_pool, run_migrations, DbConfig};
use monopoly_server::http::{run_server, ServerConfig};

use super::db::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Interface to bind (all interfaces by default)
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Apply pending migrations before serving
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);
    tracing::debug!(config = ?db_config, "database settings");

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    if args.migrate {
        run_migrations(&pool)
            .await
            .context("Failed to apply migrations")?;
    }

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
