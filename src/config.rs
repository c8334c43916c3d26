use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub menu_collection: String,
    pub service_port: u16,
    pub service_host: String,
    pub public_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    ///
    /// `from_env` passes the process environment; tests pass a map so they
    /// never touch global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongodb_uri = lookup("MONGODB_URI")
            .unwrap_or_else(|| "mongodb://127.0.0.1:27017/".to_string());

        let mongodb_database = lookup("MONGODB_DATABASE")
            .unwrap_or_else(|| "testdb".to_string());

        let menu_collection = lookup("MENU_COLLECTION")
            .unwrap_or_else(|| "menuLinks".to_string());

        let service_port = lookup("PORT")
            .unwrap_or_else(|| "8888".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let public_dir = lookup("PUBLIC_DIR")
            .unwrap_or_else(|| "public".to_string());

        Ok(Config {
            mongodb_uri,
            mongodb_database,
            menu_collection,
            service_port,
            service_host,
            public_dir,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  MongoDB URI: {}", self.mongodb_uri);
        tracing::info!("  MongoDB database: {}", self.mongodb_database);
        tracing::info!("  Menu collection: {}", self.menu_collection);
        tracing::info!("  Static assets: {}", self.public_dir);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
