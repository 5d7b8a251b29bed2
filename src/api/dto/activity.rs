//! DTOs for the user activity tracker.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::lenient;
use crate::domain::entities::{ActivityRecord, NEVER_ACTIVE, UserActivity};

/// One row of `GET /api/user-activity/all-status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivityStatusDto {
    pub user_id: i64,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub shop_id: Option<String>,

    #[serde(default)]
    pub shop_store_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub last_activity_time: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub last_login_time: Option<DateTime<Utc>>,

    /// Missing or non-numeric values mean "never active".
    #[serde(default, deserialize_with = "lenient::whole_number")]
    pub minutes_since_last_activity: Option<i64>,
}

impl From<UserActivityStatusDto> for UserActivity {
    fn from(dto: UserActivityStatusDto) -> Self {
        Self {
            record: ActivityRecord::new(
                dto.user_id,
                dto.last_activity_time,
                dto.minutes_since_last_activity.unwrap_or(NEVER_ACTIVE),
            ),
            email: dto.email.unwrap_or_default(),
            shop_id: dto.shop_id,
            shop_store_name: dto.shop_store_name.filter(|s| !s.is_empty()),
            last_login_time: dto.last_login_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_row() {
        let json = r#"{
            "userId": 12,
            "email": "owner@shop.in",
            "isActive": false,
            "shopId": 301,
            "shopStoreName": "Sharma Mobiles",
            "lastLoginTime": "2026-10-01T08:00:00",
            "lastActivityTime": "2026-10-01T09:30:00Z",
            "minutesSinceLastActivity": 4320,
            "inactivityThresholdMinutes": 15
        }"#;

        let dto: UserActivityStatusDto = serde_json::from_str(json).unwrap();
        let user = UserActivity::from(dto);

        assert_eq!(user.record.user_id, 12);
        assert_eq!(user.record.minutes_since_last_activity, 4320);
        assert!(user.record.last_activity_time.is_some());
        assert_eq!(user.shop_id.as_deref(), Some("301"));
        assert_eq!(user.shop_store_name.as_deref(), Some("Sharma Mobiles"));
        assert!(user.last_login_time.is_some());
    }

    #[test]
    fn test_sparse_row_defaults_to_never_active() {
        let json = r#"{"userId": 5, "lastActivityTime": null, "minutesSinceLastActivity": "n/a"}"#;

        let user = UserActivity::from(serde_json::from_str::<UserActivityStatusDto>(json).unwrap());

        assert!(user.record.is_never_active());
        assert!(user.record.last_activity_time.is_none());
        assert_eq!(user.email, "");
        assert!(user.shop_id.is_none());
    }

    #[test]
    fn test_missing_minutes_is_never_active() {
        let user =
            UserActivity::from(serde_json::from_str::<UserActivityStatusDto>(r#"{"userId":1}"#).unwrap());
        assert_eq!(user.record.minutes_since_last_activity, NEVER_ACTIVE);
    }
}
