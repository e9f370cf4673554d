use crate::config::DbSettings;
use crate::errors::{Error, Result};
use crate::model::StoredRecord;
use crate::store::{RecordStore, WindowQuery};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::str::FromStr;
use tracing::{info, warn};

const COUNT_QUERY: &str = "SELECT COUNT(*) FROM sensor_data";

const WINDOW_QUERY: &str = r#"
    SELECT id, accel_x, accel_y, accel_z, gyro_x, gyro_y, gyro_z,
           latitude, longitude, observed_at, speed, vibration,
           temperature, created_at, anomaly
    FROM sensor_data
    ORDER BY created_at ASC, id ASC
    OFFSET $1
    LIMIT $2
    "#;

/// Open the process-wide pool. Setup is bounded by `settings.connect_timeout`.
pub async fn connect(settings: &DbSettings) -> Result<PgPool> {
    let url = settings.url.trim();
    if url.is_empty() {
        return Err(Error::Configuration(
            "No database URL was specified".to_string(),
        ));
    }

    let ssl_mode = if settings.tls_skip_verify {
        warn!("TLS certificate validation is disabled for the database connection");
        PgSslMode::Require
    } else {
        PgSslMode::VerifyFull
    };

    let options = PgConnectOptions::from_str(url)
        .map_err(|e| Error::Configuration(format!("Invalid database URL: {}", e)))?
        .ssl_mode(ssl_mode);

    info!("Connecting to database...");
    let pool = tokio::time::timeout(
        settings.connect_timeout,
        PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.connect_timeout)
            .connect_with(options),
    )
    .await
    .map_err(|_| Error::ConnectTimeout(settings.connect_timeout))?
    .map_err(|e| match e {
        sqlx::Error::PoolTimedOut => Error::ConnectTimeout(settings.connect_timeout),
        other => Error::Connection(other),
    })?;

    info!("Database connection established");

    if settings.run_migrations {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Migrations completed");
    }

    Ok(pool)
}

/// [`RecordStore`] backed by the `sensor_data` table.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn count_records(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(COUNT_QUERY)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn fetch_window(&self, query: &WindowQuery) -> Result<Vec<StoredRecord>> {
        let records = sqlx::query_as::<_, StoredRecord>(WINDOW_QUERY)
            .bind(to_bigint(query.skip))
            .bind(to_bigint(query.limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }
}

fn to_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
