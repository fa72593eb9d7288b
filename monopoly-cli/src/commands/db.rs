//! Database connection arguments shared by every command

use clap::Args;
use monopoly_server::db::{DbConfig, DEFAULT_MAX_CONNECTIONS};

/// Connection settings, read from flags or the `DB_*` environment variables
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database host
    #[arg(long, env = "DB_SERVER")]
    pub db_server: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database name
    #[arg(long, env = "DB_DATABASE")]
    pub db_database: String,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub db_max_connections: u32,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            host: args.db_server,
            port: args.db_port,
            database: args.db_database,
            user: args.db_user,
            password: args.db_password,
            max_connections: args.db_max_connections,
        }
    }
}
