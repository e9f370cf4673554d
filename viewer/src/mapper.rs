use crate::model::{DisplayRecord, StoredRecord};

/// Render pattern for observation timestamps (`YYYY-MM-DD HH:MM:SS`).
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Project a stored record into its display shape.
///
/// Numeric fields are passed through untouched; no validation happens here.
pub fn to_display(record: StoredRecord) -> DisplayRecord {
    DisplayRecord {
        time: record.observed_at.format(TIME_FORMAT).to_string(),
        id: record.id,
        accel_x: record.accel_x,
        accel_y: record.accel_y,
        accel_z: record.accel_z,
        gyro_x: record.gyro_x,
        gyro_y: record.gyro_y,
        gyro_z: record.gyro_z,
        latitude: record.latitude,
        longitude: record.longitude,
        speed: record.speed,
        vibration: record.vibration,
        temperature: record.temperature,
        anomaly: record.anomaly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record() -> StoredRecord {
        StoredRecord {
            id: "rec-1".to_string(),
            accel_x: 0.1,
            accel_y: -9.81,
            accel_z: 1e-12,
            gyro_x: f64::MIN_POSITIVE,
            gyro_y: -0.0,
            gyro_z: 123456.789,
            latitude: 6.5244,
            longitude: 3.3792,
            observed_at: Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 3).unwrap(),
            speed: 42.5,
            vibration: 1,
            temperature: 36.6,
            created_at: Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 4).unwrap(),
            anomaly: "pothole".to_string(),
        }
    }

    #[test]
    fn test_timestamp_format() {
        let display = to_display(record());
        assert_eq!(display.time, "2024-03-07 09:05:03");
    }

    #[test]
    fn test_numeric_fields_preserved_bit_for_bit() {
        let source = record();
        let display = to_display(source.clone());

        let pairs = [
            (source.accel_x, display.accel_x),
            (source.accel_y, display.accel_y),
            (source.accel_z, display.accel_z),
            (source.gyro_x, display.gyro_x),
            (source.gyro_y, display.gyro_y),
            (source.gyro_z, display.gyro_z),
            (source.latitude, display.latitude),
            (source.longitude, display.longitude),
            (source.speed, display.speed),
            (source.temperature, display.temperature),
        ];
        for (before, after) in pairs {
            assert_eq!(before.to_bits(), after.to_bits());
        }
        assert_eq!(display.vibration, 1);
        assert_eq!(display.id, "rec-1");
        assert_eq!(display.anomaly, "pothole");
    }

    #[test]
    fn test_nan_passes_through() {
        let mut source = record();
        source.temperature = f64::NAN;
        let display = to_display(source);
        assert!(display.temperature.is_nan());
    }
}
