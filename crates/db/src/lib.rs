use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::ConnectOptions;

pub mod models;
pub mod repositories;

/// A single, unpooled connection. The reconciler holds exactly one per run.
pub type DbConnection = PgConnection;

/// Open a connection with the given options.
pub async fn connect(options: &PgConnectOptions) -> Result<DbConnection, sqlx::Error> {
    tracing::debug!(
        host = options.get_host(),
        port = options.get_port(),
        "Connecting to database"
    );
    options.connect().await
}

/// Verify the connection can execute a trivial query.
pub async fn health_check(conn: &mut DbConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(conn).await?;
    Ok(())
}
