//! Election rows as read by the status reconciler.

use elections_core::error::CoreError;
use elections_core::lifecycle::ElectionStatus;
use elections_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// The subset of an `elections` row the reconciler reads.
///
/// Every column apart from `id` is optional so that a bad row is reported
/// on its own instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Election {
    pub id: DbId,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub launched: Option<bool>,
    pub status: Option<String>,
}

impl Election {
    /// `launched` with NULL read as the column default, `false`.
    pub fn is_launched(&self) -> bool {
        self.launched.unwrap_or(false)
    }

    /// The election window, or the first missing bound.
    pub fn window(&self) -> Result<(Timestamp, Timestamp), CoreError> {
        let start_date = self.start_date.ok_or_else(|| self.missing("start_date"))?;
        let end_date = self.end_date.ok_or_else(|| self.missing("end_date"))?;
        Ok((start_date, end_date))
    }

    /// The status this election should have at `now`.
    pub fn desired_status(&self, now: Timestamp) -> Result<ElectionStatus, CoreError> {
        let (start_date, end_date) = self.window()?;
        Ok(ElectionStatus::classify(
            start_date,
            end_date,
            self.is_launched(),
            now,
        ))
    }

    /// Whether the stored status text already equals `status`.
    ///
    /// NULL or unrecognised stored text never matches.
    pub fn has_status(&self, status: ElectionStatus) -> bool {
        self.status.as_deref() == Some(status.as_str())
    }

    fn missing(&self, field: &'static str) -> CoreError {
        CoreError::MissingField {
            entity: "election",
            id: self.id,
            field,
        }
    }
}
