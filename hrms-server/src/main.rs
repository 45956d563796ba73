//! hrms-server binary
//!
//! Connects to MongoDB once, then serves the employee API on port 3000.
//! Any failure while connecting aborts startup.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use hrms_server::tracing_setup::{self, TracingConfig};
use hrms_server::{run_server, MongoDb, ServerArgs, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = ServerArgs::parse();

    tracing_setup::init(&TracingConfig { debug: args.debug })?;

    let config = ServerConfig::from(args);
    tracing::info!(
        database = %config.database.database_name,
        collection = %config.database.collection_name,
        "Connecting to MongoDB"
    );

    let db = MongoDb::connect(&config.database)
        .await
        .context("unable to connect to the database")?;

    run_server(Arc::new(db), config).await?;
    Ok(())
}
