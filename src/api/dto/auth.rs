//! DTOs for admin login.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lenient;
use crate::domain::entities::AuthSession;

/// Body of `POST /login/jwt`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Tokens and identity returned on a successful login.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub user_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub shop_id: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl From<LoginPayload> for AuthSession {
    fn from(payload: LoginPayload) -> Self {
        Self {
            token: payload.user_token,
            refresh_token: payload.refresh_token,
            role: payload.role,
            shop_id: payload.shop_id,
            email: payload.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "admin@shop.in".to_string(),
            password: "secret".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = LoginRequest {
            email: "not-an-email".to_string(),
            password: String::new(),
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_login_payload_into_session() {
        let json = r#"{"userToken":"t1","role":"ADMIN","shopId":42,"email":"a@b.in"}"#;
        let session: AuthSession = serde_json::from_str::<LoginPayload>(json).unwrap().into();

        assert_eq!(session.token, "t1");
        assert_eq!(session.shop_id.as_deref(), Some("42"));
        assert!(session.refresh_token.is_none());
        assert!(session.is_admin());
    }
}
