use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sensor/anomaly observation as persisted in `sensor_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredRecord {
    pub id: String,
    pub accel_x: f64,
    pub accel_y: f64,
    pub accel_z: f64,
    pub gyro_x: f64,
    pub gyro_y: f64,
    pub gyro_z: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub observed_at: DateTime<Utc>,
    pub speed: f64,
    pub vibration: i16,
    pub temperature: f64,
    pub created_at: DateTime<Utc>,
    pub anomaly: String,
}

/// Display projection of a [`StoredRecord`], built per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub id: String,
    pub accel_x: f64,
    pub accel_y: f64,
    pub accel_z: f64,
    pub gyro_x: f64,
    pub gyro_y: f64,
    pub gyro_z: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub time: String,
    pub speed: f64,
    pub vibration: i16,
    pub temperature: f64,
    pub anomaly: String,
}

/// One page of display records plus the metadata the listing needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult {
    pub items: Vec<DisplayRecord>,
    pub total_pages: u64,
    pub page_number: u64,
    pub total_records: u64,
}

/// JSON API response wrapper
#[derive(Debug, Serialize)]
pub struct PageResponse {
    #[serde(flatten)]
    pub page: PageResult,
    pub links: Vec<u64>,
}
