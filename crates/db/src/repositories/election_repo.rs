//! Repository for the `elections` table.

use elections_core::lifecycle::ElectionStatus;
use elections_core::types::DbId;
use sqlx::postgres::PgExecutor;

use crate::models::election::Election;

/// Column list for `elections` SELECT queries.
const COLUMNS: &str = "id, start_date, end_date, launched, status";

/// Provides query operations for elections.
pub struct ElectionRepo;

impl ElectionRepo {
    /// Load every election, ordered by id.
    pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Election>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM elections ORDER BY id");
        sqlx::query_as::<_, Election>(&query)
            .fetch_all(executor)
            .await
    }

    /// Find a single election by id.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Election>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM elections WHERE id = $1");
        sqlx::query_as::<_, Election>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Overwrite an election's status.
    ///
    /// Runs outside any transaction, so the change is committed as soon as
    /// the statement completes. Returns the number of rows affected, which
    /// is zero if the election no longer exists.
    pub async fn update_status<'e, E>(
        executor: E,
        id: DbId,
        status: ElectionStatus,
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("UPDATE elections SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
