use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

/// File name of the persisted collection inside the data directory
pub const DATA_FILE_NAME: &str = "shoppingList.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let data_dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));

        Ok(Config {
            service_port,
            service_host,
            data_dir,
        })
    }

    /// Full path of the JSON file holding the shopping list
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data file: {}", self.data_file().display());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
