//! Server configuration from command-line flags or environment variables.

use clap::Parser;

/// Greeting returned by `GET /` unless overridden.
pub const DEFAULT_GREETING: &str = "Product and customer catalog API";

/// Runtime settings for the catalog server.
#[derive(Parser, Debug, Clone)]
#[command(name = "catalog-server", about = "CRUD API over products and customers")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "CATALOG_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// SQLite database file, or `:memory:`.
    #[arg(long = "database", env = "CATALOG_DATABASE", default_value = "catalog.sqlite")]
    pub database: String,

    /// Text returned by `GET /`.
    #[arg(long, env = "CATALOG_GREETING", default_value = DEFAULT_GREETING)]
    pub greeting: String,

    /// Create the product and customer tables if they do not exist.
    #[arg(
        long,
        env = "CATALOG_INIT_SCHEMA",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub init_schema: bool,
}

impl Config {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
