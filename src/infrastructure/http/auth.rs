//! HTTP implementation of admin login.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

use super::ApiClient;
use crate::api::dto::envelope::Wrapped;
use crate::api::dto::{ApiEnvelope, LoginPayload, LoginRequest};
use crate::domain::entities::AuthSession;
use crate::domain::repositories::AuthRepository;
use crate::error::AppError;

pub struct HttpAuthRepository {
    client: Arc<ApiClient>,
}

impl HttpAuthRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let envelope: ApiEnvelope<LoginPayload> = self
            .client
            .send(Method::POST, &["login", "jwt"], &request)
            .await?;

        if let ApiEnvelope::Wrapped(Wrapped { status, message, .. }) = &envelope {
            let succeeded = status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case("success"));
            if !succeeded {
                tracing::warn!(email, status = ?status, "Login rejected by backend");
                return Err(AppError::unauthorized(
                    message.clone().unwrap_or_else(|| "Login failed".to_string()),
                    json!({ "status": status }),
                ));
            }
        }

        Ok(envelope.into_payload()?.into())
    }
}
