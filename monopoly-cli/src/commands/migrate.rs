//! Apply the embedded schema migrations and exit

use anyhow::{Context, Result};
use clap::Parser;

use monopoly_server::db::{create_pool, run_migrations, DbConfig};

use super::db::DbArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&DbConfig::from(args.db))
        .await
        .context("Failed to create database pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to apply migrations")?;

    tracing::info!("Migrations applied");
    pool.close().await;
    Ok(())
}
