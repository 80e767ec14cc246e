use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::layout::FontFamily;

/// Where the record and the progress ledger are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
    Redis,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "postgres" => Ok(StoreBackend::Postgres),
            "redis" => Ok(StoreBackend::Redis),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable required by the chosen backend is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
    pub pdf_font: FontFamily,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let store_backend: StoreBackend = optional_env("STORE_BACKEND")
            .unwrap_or_else(|| "memory".to_string())
            .parse()
            .map_err(|e: String| anyhow!(e))
            .context("STORE_BACKEND must be one of memory, postgres, redis")?;

        let database_url = match store_backend {
            StoreBackend::Postgres => Some(require_env("DATABASE_URL")?),
            _ => optional_env("DATABASE_URL"),
        };
        let redis_url = match store_backend {
            StoreBackend::Redis => Some(require_env("REDIS_URL")?),
            _ => optional_env("REDIS_URL"),
        };

        Ok(Config {
            store_backend,
            database_url,
            redis_url,
            pdf_font: optional_env("PDF_FONT")
                .unwrap_or_else(|| "helvetica".to_string())
                .parse()
                .map_err(|e: String| anyhow!(e))
                .context("PDF_FONT must be one of helvetica, times, courier")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
