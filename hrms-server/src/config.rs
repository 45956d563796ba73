//! Server configuration
//!
//! Only the connection string comes from the outside world. Database name,
//! collection name and listening port are fixed.

use std::net::SocketAddr;
use std::time::Duration;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// Environment variable holding the MongoDB connection string
pub const CONNECTION_STRING_ENV: &str = "MONGODB_CONNECTION_STRING";

/// Logical database holding the employee collection
pub const DATABASE_NAME: &str = "fiber-hrms";

/// Collection holding one document per employee
pub const COLLECTION_NAME: &str = "employees";

/// Port the HTTP server listens on
pub const LISTEN_PORT: u16 = 3000;

/// Upper bound on connecting and pinging the database at startup
pub const STARTUP_TIMEOUT: Duration = Duration::from_secs(30);

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "hrms-server", version, about = "Employee records HTTP service")]
pub struct ServerArgs {
    /// MongoDB connection string
    #[arg(
        long,
        env = CONNECTION_STRING_ENV,
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub connection_string: String,

    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long)]
    pub debug: bool,
}

/// Database connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub startup_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database_name: DATABASE_NAME.to_string(),
            collection_name: COLLECTION_NAME.to_string(),
            startup_timeout: STARTUP_TIMEOUT,
        }
    }
}

// The URI carries credentials; keep it out of debug output.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("uri", &"<redacted>")
            .field("database_name", &self.database_name)
            .field("collection_name", &self.collection_name)
            .field("startup_timeout", &self.startup_timeout)
            .finish()
    }
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (all interfaces, port 3000)
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
}

impl From<ServerArgs> for ServerConfig {
    fn from(args: ServerArgs) -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT)),
            database: DatabaseConfig::new(args.connection_string),
        }
    }
}
