//! Deadline urgency relative to "today" and an alert window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default alert window, in days.
pub const DEFAULT_ALERT_WINDOW_DAYS: u32 = 30;

/// Urgency of a resolved deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    /// The deadline is in the past.
    Overdue,
    /// The deadline is today or within the alert window.
    Upcoming,
    /// The deadline is beyond the alert window.
    Ok,
}

impl DeadlineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Upcoming => "upcoming",
            Self::Ok => "ok",
        }
    }

    /// Classify a day difference against the window.
    pub fn from_days_remaining(days_remaining: i64, alert_window_days: u32) -> Self {
        if days_remaining < 0 {
            Self::Overdue
        } else if days_remaining <= i64::from(alert_window_days) {
            Self::Upcoming
        } else {
            Self::Ok
        }
    }
}

/// Return `(status, days_remaining)` for `deadline` as seen from `today`.
pub fn evaluate(
    deadline: NaiveDate,
    today: NaiveDate,
    alert_window_days: u32,
) -> (DeadlineStatus, i64) {
    let days_remaining = deadline.signed_duration_since(today).num_days();
    (
        DeadlineStatus::from_days_remaining(days_remaining, alert_window_days),
        days_remaining,
    )
}
