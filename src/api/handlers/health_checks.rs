//! Database probes used by the readiness endpoint

use sqlx::PgPool;
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Sanitize database error messages to prevent information leakage
pub fn sanitize_db_error(error: &sqlx::Error) -> String {
    match error {
        sqlx::Error::Configuration(_) => "Database configuration error".to_string(),
        sqlx::Error::Database(_) => "Database operation error".to_string(),
        sqlx::Error::Io(_) => "Database connection error".to_string(),
        sqlx::Error::Tls(_) => "Database TLS error".to_string(),
        sqlx::Error::Protocol(_) => "Database protocol error".to_string(),
        sqlx::Error::RowNotFound => "Record not found".to_string(),
        sqlx::Error::TypeNotFound { .. } => "Database type error".to_string(),
        sqlx::Error::ColumnIndexOutOfBounds { .. } | sqlx::Error::ColumnNotFound(_) => {
            "Database column error".to_string()
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            "Database decode error".to_string()
        }
        sqlx::Error::PoolTimedOut => "Database pool timeout".to_string(),
        sqlx::Error::PoolClosed => "Database pool closed".to_string(),
        sqlx::Error::WorkerCrashed => "Database worker error".to_string(),
        _ => "Database error".to_string(),
    }
}

/// Run `SELECT 1` with a timeout; `Ok` carries the round-trip time
pub async fn check_database_connectivity(pool: &PgPool) -> Result<Duration, String> {
    let start = std::time::Instant::now();

    match tokio::time::timeout(
        PROBE_TIMEOUT,
        sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool),
    )
    .await
    {
        Ok(Ok(1)) => Ok(start.elapsed()),
        Ok(Ok(_)) => Err("Unexpected database response".to_string()),
        Ok(Err(e)) => Err(sanitize_db_error(&e)),
        Err(_) => Err(format!(
            "Database query timed out after {} seconds",
            PROBE_TIMEOUT.as_secs()
        )),
    }
}
