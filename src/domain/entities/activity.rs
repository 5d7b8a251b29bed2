//! User activity entities for the Inactive Users screen.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Sentinel for `minutes_since_last_activity` when the user was never active.
pub const NEVER_ACTIVE: i64 = -1;

/// Last-activity facts for one user, as computed by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub user_id: i64,
    pub last_activity_time: Option<DateTime<Utc>>,
    /// Whole minutes since the last activity, or [`NEVER_ACTIVE`].
    pub minutes_since_last_activity: i64,
}

impl ActivityRecord {
    pub fn new(
        user_id: i64,
        last_activity_time: Option<DateTime<Utc>>,
        minutes_since_last_activity: i64,
    ) -> Self {
        Self {
            user_id,
            last_activity_time,
            minutes_since_last_activity,
        }
    }

    /// Returns true if the backend has no recorded activity for the user.
    pub fn is_never_active(&self) -> bool {
        self.minutes_since_last_activity == NEVER_ACTIVE
    }
}

impl AsRef<ActivityRecord> for ActivityRecord {
    fn as_ref(&self) -> &ActivityRecord {
        self
    }
}

/// A full activity row: the record plus the account details shown in tables.
#[derive(Debug, Clone, PartialEq)]
pub struct UserActivity {
    pub record: ActivityRecord,
    pub email: String,
    pub shop_id: Option<String>,
    pub shop_store_name: Option<String>,
    pub last_login_time: Option<DateTime<Utc>>,
}

impl AsRef<ActivityRecord> for UserActivity {
    fn as_ref(&self) -> &ActivityRecord {
        &self.record
    }
}

/// Table row for the inactive-user list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InactiveUserRow {
    pub user_id: i64,
    pub email: String,
    pub store: String,
    pub shop_id: String,
    pub last_activity: String,
    pub minutes_since: String,
}

impl From<&UserActivity> for InactiveUserRow {
    fn from(user: &UserActivity) -> Self {
        let record = &user.record;
        Self {
            user_id: record.user_id,
            email: user.email.clone(),
            store: user.shop_store_name.clone().unwrap_or_else(|| "-".to_string()),
            shop_id: user.shop_id.clone().unwrap_or_else(|| "-".to_string()),
            last_activity: record
                .last_activity_time
                .map(|t| t.format("%d/%m/%Y, %H:%M:%S").to_string())
                .unwrap_or_else(|| "Never".to_string()),
            minutes_since: if record.is_never_active() {
                "Never".to_string()
            } else {
                record.minutes_since_last_activity.to_string()
            },
        }
    }
}

/// One point of the inactive-user trend line.
///
/// Serializes as `{ "name": "Oct 4", "inactive": 12 }` for line-chart widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    #[serde(rename = "name")]
    pub label: String,
    #[serde(rename = "inactive")]
    pub inactive_count: usize,
}

/// Unit for the inactivity threshold input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdUnit {
    Hours,
    Days,
}

impl ThresholdUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdUnit::Hours => "hours",
            ThresholdUnit::Days => "days",
        }
    }
}

impl fmt::Display for ThresholdUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThresholdUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hours" | "hour" | "h" => Ok(ThresholdUnit::Hours),
            "days" | "day" | "d" => Ok(ThresholdUnit::Days),
            other => Err(format!("unknown threshold unit '{other}'")),
        }
    }
}

/// Inactivity threshold as entered on the Inactive Users screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityThreshold {
    pub value: u32,
    pub unit: ThresholdUnit,
}

impl InactivityThreshold {
    pub fn new(value: u32, unit: ThresholdUnit) -> Self {
        Self { value, unit }
    }

    pub fn hours(value: u32) -> Self {
        Self::new(value, ThresholdUnit::Hours)
    }

    pub fn days(value: u32) -> Self {
        Self::new(value, ThresholdUnit::Days)
    }

    /// "2 Days" preset button.
    pub fn two_days() -> Self {
        Self::days(2)
    }

    /// "7 Days" preset button.
    pub fn seven_days() -> Self {
        Self::days(7)
    }

    /// Threshold in whole minutes.
    pub fn minutes(&self) -> i64 {
        let value = i64::from(self.value);
        match self.unit {
            ThresholdUnit::Hours => value * 60,
            ThresholdUnit::Days => value * 24 * 60,
        }
    }
}

impl Default for InactivityThreshold {
    fn default() -> Self {
        Self::hours(48)
    }
}
