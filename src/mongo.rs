use anyhow::{Context, Result};
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::config::Config;

/// Shareable MongoDB handle for use across async handlers
///
/// Wraps the selected database. The driver reference counts the underlying
/// client, so cloning is cheap and every clone shares one connection pool.
#[derive(Clone)]
pub struct MongoClient {
    database: Database,
}

impl MongoClient {
    /// Create a new MongoDB client from configuration
    ///
    /// Parsing the connection string happens here; the driver connects lazily,
    /// so an unreachable server only surfaces on the first operation.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .context("Failed to parse MongoDB connection string")?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options).context("Failed to create MongoDB client")?;
        let database = client.database(&config.mongodb_database);

        tracing::info!(
            "MongoDB client ready for database: {}",
            config.mongodb_database
        );

        Ok(Self { database })
    }

    /// Get the handle to the configured database
    pub fn database(&self) -> Database {
        self.database.clone()
    }

    /// Perform a health check by running `{ ping: 1 }` against the database
    ///
    /// # Errors
    /// Returns an error if the server cannot be selected or the command fails
    pub async fn health_check(&self) -> mongodb::error::Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        tracing::debug!("Health check ping succeeded");
        Ok(())
    }
}
