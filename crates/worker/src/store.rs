//! The seam between the reconciler and the `elections` table.

use async_trait::async_trait;
use elections_core::lifecycle::ElectionStatus;
use elections_core::types::DbId;
use elections_db::models::election::Election;
use elections_db::repositories::ElectionRepo;
use elections_db::DbConnection;

/// Reads elections and writes back their status.
#[async_trait]
pub trait ElectionStore: Send {
    /// Load every election.
    async fn load_elections(&mut self) -> Result<Vec<Election>, sqlx::Error>;

    /// Persist a new status for one election, returning the rows affected.
    async fn update_status(&mut self, id: DbId, status: ElectionStatus)
        -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl ElectionStore for DbConnection {
    async fn load_elections(&mut self) -> Result<Vec<Election>, sqlx::Error> {
        ElectionRepo::list_all(self).await
    }

    async fn update_status(
        &mut self,
        id: DbId,
        status: ElectionStatus,
    ) -> Result<u64, sqlx::Error> {
        ElectionRepo::update_status(self, id, status).await
    }
}
