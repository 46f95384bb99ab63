use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl AppConfig {
    /// Reads HOST, PORT and DATABASE_URL from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "3002".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        Ok(Self { host, port, database_url })
    }
}
