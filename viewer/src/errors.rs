use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database connection timed out after {0:?}")]
    ConnectTimeout(Duration),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Count failed: {0}")]
    Count(#[source] Box<Error>),

    #[error("Query failed: {0}")]
    Query(#[source] Box<Error>),

    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error stops startup rather than a single request.
    #[cfg(test)]
    pub(crate) fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Configuration(_)
                | Error::Connection(_)
                | Error::ConnectTimeout(_)
                | Error::Migration(_)
                | Error::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(Error::Configuration("missing".to_string()).is_fatal());
        assert!(Error::ConnectTimeout(Duration::from_secs(90)).is_fatal());
        assert!(!Error::DeadlineExceeded.is_fatal());
        assert!(!Error::Query(Box::new(Error::Database(sqlx::Error::PoolTimedOut))).is_fatal());
    }

    #[test]
    fn test_query_error_keeps_cause() {
        let err = Error::Query(Box::new(Error::Database(sqlx::Error::PoolClosed)));
        assert!(err.to_string().starts_with("Query failed: Database error"));
    }
}
