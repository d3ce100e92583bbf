use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Every variable carries a default, so a bare environment still boots.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the CSV ledger that parsed records are appended to.
    pub ledger_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ledger_path: std::env::var("LEDGER_PATH")
                .unwrap_or_else(|_| "parsed_resumes.csv".to_string())
                .into(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
