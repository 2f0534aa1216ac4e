//! One reconciliation pass over every election.

use elections_core::error::CoreError;
use elections_core::lifecycle::ElectionStatus;
use elections_core::types::{DbId, Timestamp};
use elections_db::models::election::Election;

use crate::error::JobError;
use crate::store::ElectionStore;

/// A failure confined to a single election. The run carries on past it.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error(transparent)]
    Malformed(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Outcome of a single reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Elections loaded.
    pub scanned: usize,
    /// Elections whose stored status was already correct.
    pub unchanged: usize,
    /// Elections whose status was rewritten.
    pub updated: usize,
    /// Elections that disappeared between the read and the write.
    pub skipped: usize,
    /// Elections that could not be reconciled, in the order encountered.
    pub failed_ids: Vec<DbId>,
}

impl RunReport {
    pub fn failed(&self) -> usize {
        self.failed_ids.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed_ids.is_empty()
    }
}

/// What happened to one election.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowOutcome {
    Unchanged,
    Updated,
    Vanished,
}

/// Recompute and persist the status of every election in `store`.
///
/// `now` is used for every row so that all elections are judged against the
/// same instant. Rows are written one at a time, only when their status
/// changes; a failed row is logged and counted and does not stop the pass.
pub async fn reconcile_all<S>(store: &mut S, now: Timestamp) -> Result<RunReport, JobError>
where
    S: ElectionStore + ?Sized,
{
    let elections = store.load_elections().await.map_err(JobError::Fetch)?;
    tracing::debug!(count = elections.len(), %now, "Loaded elections");

    let mut report = RunReport {
        scanned: elections.len(),
        ..RunReport::default()
    };

    for election in &elections {
        match reconcile_one(store, election, now).await {
            Ok(RowOutcome::Unchanged) => report.unchanged += 1,
            Ok(RowOutcome::Updated) => report.updated += 1,
            Ok(RowOutcome::Vanished) => report.skipped += 1,
            Err(e) => {
                tracing::error!(election_id = election.id, error = %e, "Failed to reconcile election");
                report.failed_ids.push(election.id);
            }
        }
    }

    Ok(report)
}

async fn reconcile_one<S>(
    store: &mut S,
    election: &Election,
    now: Timestamp,
) -> Result<RowOutcome, RowError>
where
    S: ElectionStore + ?Sized,
{
    let id = election.id;
    let new_status = election.desired_status(now)?;

    if election.has_status(new_status) {
        tracing::debug!(election_id = id, status = %new_status, "No change");
        return Ok(RowOutcome::Unchanged);
    }

    let old_status = election.status.as_deref().unwrap_or("NULL");
    tracing::info!(
        election_id = id,
        from = old_status,
        to = %new_status,
        "Updating election {id} status from {old_status} to {new_status}"
    );

    match store.update_status(id, new_status).await? {
        0 => {
            tracing::warn!(election_id = id, "Election vanished before its status could be updated");
            Ok(RowOutcome::Vanished)
        }
        _ => Ok(RowOutcome::Updated),
    }
}
