//! Election lifecycle status and the rule that derives it.
//!
//! The status of an election is never advanced step by step. It is
//! recomputed from scratch on every run from the election's window, its
//! `launched` flag and the current time, so any status may follow any other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status stored in `elections.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionStatus {
    /// Not launched and not started yet.
    Building,
    /// Launched, waiting for `start_date`.
    Scheduled,
    /// Launched and inside its window.
    Ongoing,
    /// Reached its window without being launched.
    Cancelled,
    /// Launched and past `end_date`.
    Finished,
}

impl ElectionStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [ElectionStatus; 5] = [
        ElectionStatus::Building,
        ElectionStatus::Scheduled,
        ElectionStatus::Ongoing,
        ElectionStatus::Cancelled,
        ElectionStatus::Finished,
    ];

    /// The text stored in the database column.
    pub fn as_str(self) -> &'static str {
        match self {
            ElectionStatus::Building => "building",
            ElectionStatus::Scheduled => "scheduled",
            ElectionStatus::Ongoing => "ongoing",
            ElectionStatus::Cancelled => "cancelled",
            ElectionStatus::Finished => "finished",
        }
    }

    /// Derive the status an election should have at `now`.
    ///
    /// The window is inclusive on both ends: `now == start_date` and
    /// `now == end_date` both count as inside it. `start_date <= end_date`
    /// is assumed, not checked.
    pub fn classify(
        start_date: Timestamp,
        end_date: Timestamp,
        launched: bool,
        now: Timestamp,
    ) -> Self {
        match WindowPhase::of(start_date, end_date, now) {
            WindowPhase::Before if launched => ElectionStatus::Scheduled,
            WindowPhase::Before => ElectionStatus::Building,
            WindowPhase::During if launched => ElectionStatus::Ongoing,
            WindowPhase::After if launched => ElectionStatus::Finished,
            WindowPhase::During | WindowPhase::After => ElectionStatus::Cancelled,
        }
    }
}

impl fmt::Display for ElectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElectionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElectionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown election status: {s:?}")))
    }
}

// ---------------------------------------------------------------------------
// Window phase
// ---------------------------------------------------------------------------

/// Where `now` falls relative to an election's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    Before,
    During,
    After,
}

impl WindowPhase {
    pub fn of(start_date: Timestamp, end_date: Timestamp, now: Timestamp) -> Self {
        if now < start_date {
            WindowPhase::Before
        } else if now > end_date {
            WindowPhase::After
        } else {
            WindowPhase::During
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;

    fn at(year: i32, month: u32, day: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn june_window() -> (Timestamp, Timestamp) {
        (at(2025, 6, 1), at(2025, 6, 10))
    }

    // -----------------------------------------------------------------------
    // Classification scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn launched_before_window_is_scheduled() {
        let (start, end) = june_window();
        assert_eq!(
            ElectionStatus::classify(start, end, true, at(2025, 5, 1)),
            ElectionStatus::Scheduled
        );
    }

    #[test]
    fn unlaunched_before_window_is_building() {
        let (start, end) = june_window();
        assert_eq!(
            ElectionStatus::classify(start, end, false, at(2025, 5, 1)),
            ElectionStatus::Building
        );
    }

    #[test]
    fn launched_inside_window_is_ongoing() {
        let (start, end) = june_window();
        assert_eq!(
            ElectionStatus::classify(start, end, true, at(2025, 6, 5)),
            ElectionStatus::Ongoing
        );
    }

    #[test]
    fn unlaunched_inside_window_is_cancelled() {
        let (start, end) = june_window();
        assert_eq!(
            ElectionStatus::classify(start, end, false, at(2025, 6, 5)),
            ElectionStatus::Cancelled
        );
    }

    #[test]
    fn launched_at_end_date_is_still_ongoing() {
        let (start, end) = june_window();
        assert_eq!(
            ElectionStatus::classify(start, end, true, at(2025, 6, 10)),
            ElectionStatus::Ongoing
        );
    }

    #[test]
    fn launched_after_window_is_finished() {
        let (start, end) = june_window();
        assert_eq!(
            ElectionStatus::classify(start, end, true, at(2025, 7, 1)),
            ElectionStatus::Finished
        );
    }

    #[test]
    fn unlaunched_after_window_is_cancelled() {
        let (start, end) = june_window();
        assert_eq!(
            ElectionStatus::classify(start, end, false, at(2025, 7, 1)),
            ElectionStatus::Cancelled
        );
    }

    // -----------------------------------------------------------------------
    // Boundaries
    // -----------------------------------------------------------------------

    #[test]
    fn start_date_is_inside_window() {
        let (start, end) = june_window();
        assert_eq!(WindowPhase::of(start, end, start), WindowPhase::During);
        assert_eq!(
            ElectionStatus::classify(start, end, true, start),
            ElectionStatus::Ongoing
        );
    }

    #[test]
    fn one_second_either_side_of_window_is_outside() {
        let (start, end) = june_window();
        let tick = Duration::seconds(1);
        assert_eq!(WindowPhase::of(start, end, start - tick), WindowPhase::Before);
        assert_eq!(WindowPhase::of(start, end, end), WindowPhase::During);
        assert_eq!(WindowPhase::of(start, end, end + tick), WindowPhase::After);
    }

    #[test]
    fn zero_length_window_has_a_single_during_instant() {
        let instant = at(2025, 6, 1);
        let tick = Duration::seconds(1);
        assert_eq!(WindowPhase::of(instant, instant, instant), WindowPhase::During);
        assert_eq!(
            WindowPhase::of(instant, instant, instant - tick),
            WindowPhase::Before
        );
        assert_eq!(
            WindowPhase::of(instant, instant, instant + tick),
            WindowPhase::After
        );
    }

    #[test]
    fn phases_partition_the_timeline() {
        let (start, end) = june_window();
        let mut now = at(2025, 5, 30);
        let mut previous = WindowPhase::Before;
        while now <= at(2025, 6, 12) {
            let phase = WindowPhase::of(start, end, now);
            let expected = if now < start {
                WindowPhase::Before
            } else if now <= end {
                WindowPhase::During
            } else {
                WindowPhase::After
            };
            assert_eq!(phase, expected, "at {now}");
            // Phases only move forward as time advances.
            assert!(phase as u8 >= previous as u8, "regressed at {now}");
            previous = phase;
            now += Duration::hours(6);
        }
    }

    // -----------------------------------------------------------------------
    // Text form
    // -----------------------------------------------------------------------

    #[test]
    fn parses_every_stored_value() {
        for status in ElectionStatus::ALL {
            assert_eq!(status.as_str().parse::<ElectionStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_status_text() {
        let err = "Ongoing".parse::<ElectionStatus>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("Ongoing"));
    }

    #[test]
    fn serializes_as_lowercase_text() {
        let json = serde_json::to_string(&ElectionStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        let parsed: ElectionStatus = serde_json::from_str("\"finished\"").unwrap();
        assert_eq!(parsed, ElectionStatus::Finished);
    }
}
