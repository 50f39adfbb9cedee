//! Server config: bind port, database, logging, rate limit. Loaded from env.

use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PORT
    pub port: u16,
    /// DATABASE_URL (SQLite file path or in-memory)
    pub database_url: String,
    /// LOG_FILE
    pub log_file: String,
    /// RATE_LIMIT_PER_MINUTE, blanket per-IP cap on all endpoints
    pub rate_limit_per_minute: u32,
}

impl ServerConfig {
    /// Load from environment variables.
    pub fn load() -> Result<Self> {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "./doran.db".to_string());
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "doran-server.log".to_string());
        let rate_limit_per_minute = env::var("RATE_LIMIT_PER_MINUTE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        Ok(Self {
            port,
            database_url,
            log_file,
            rate_limit_per_minute,
        })
    }
}
