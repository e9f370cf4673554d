use crate::engine::CountPolicy;
use crate::errors::{Error, Result};
use clap::Parser;
use std::time::Duration;

/// Runtime configuration, read from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "anomaly-viewer", about = "Paginated viewer for sensor anomaly records")]
pub struct Config {
    /// Postgres connection URL (required).
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address the HTTP server binds to.
    #[arg(long, env = "HTTP_ADDR", default_value = "0.0.0.0:8080")]
    pub http_addr: String,

    /// Seconds allowed for establishing the database connection.
    #[arg(long, env = "DB_CONNECT_TIMEOUT_SECS", default_value_t = 90)]
    pub connect_timeout_secs: u64,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 20)]
    pub max_connections: u32,

    /// Encrypt the connection without validating the server certificate.
    #[arg(long, env = "DB_TLS_SKIP_VERIFY")]
    pub tls_skip_verify: bool,

    /// Fail page requests when the record count fails instead of reporting zero.
    #[arg(long, env = "STRICT_COUNT")]
    pub strict_count: bool,

    /// Per-request deadline for store queries, in seconds.
    #[arg(long, env = "QUERY_TIMEOUT_SECS")]
    pub query_timeout_secs: Option<u64>,

    /// Apply the embedded schema migrations at startup.
    #[arg(long, env = "RUN_MIGRATIONS")]
    pub run_migrations: bool,
}

/// Settings consumed by [`crate::db::connect`].
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub url: String,
    pub connect_timeout: Duration,
    pub max_connections: u32,
    pub tls_skip_verify: bool,
    pub run_migrations: bool,
}

impl Config {
    pub fn database_url(&self) -> Result<&str> {
        require_database_url(self.database_url.as_deref())
    }

    pub fn db_settings(&self) -> Result<DbSettings> {
        Ok(DbSettings {
            url: self.database_url()?.to_string(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            max_connections: self.max_connections,
            tls_skip_verify: self.tls_skip_verify,
            run_migrations: self.run_migrations,
        })
    }

    pub fn count_policy(&self) -> CountPolicy {
        if self.strict_count {
            CountPolicy::Propagate
        } else {
            CountPolicy::DegradeToZero
        }
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_secs.map(Duration::from_secs)
    }
}

fn require_database_url(raw: Option<&str>) -> Result<&str> {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(Error::Configuration(
            "No database URL was specified".to_string(),
        )),
    }
}
