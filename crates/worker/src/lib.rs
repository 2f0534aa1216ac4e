//! Election status reconciler.
//!
//! Loads every election, recomputes its lifecycle status from its window and
//! `launched` flag, and writes back the statuses that changed.

pub mod config;
pub mod error;
pub mod reconcile;
pub mod store;

use elections_core::types::Timestamp;

use crate::config::DbConfig;
use crate::error::JobError;
use crate::reconcile::{reconcile_all, RunReport};

/// Connect, reconcile every election, and disconnect.
///
/// The connection is closed on every path out of the reconcile step. Nothing
/// is read or written if connecting fails.
pub async fn run(config: &DbConfig, now: Timestamp) -> Result<RunReport, JobError> {
    let mut conn = elections_db::connect(&config.connect_options())
        .await
        .map_err(JobError::Connect)?;

    if let Err(e) = elections_db::health_check(&mut conn).await {
        close(conn).await;
        return Err(JobError::Connect(e));
    }
    tracing::info!("Database connection established");

    let result = reconcile_all(&mut conn, now).await;
    close(conn).await;
    result
}

async fn close(conn: elections_db::DbConnection) {
    use sqlx::Connection;

    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection cleanly");
    }
}
