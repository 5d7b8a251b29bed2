//! Admin login and logout.

use std::sync::Arc;
use validator::Validate;

use crate::api::dto::LoginRequest;
use crate::domain::entities::AuthSession;
use crate::domain::repositories::AuthRepository;
use crate::error::AppError;
use crate::state::SessionStore;

/// Exchanges credentials for a session and keeps it in the [`SessionStore`].
///
/// Every HTTP repository reads the bearer token from the same store, so a
/// successful login authorizes all later requests.
pub struct AuthService<R: AuthRepository> {
    repository: Arc<R>,
    session: SessionStore,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repository: Arc<R>, session: SessionStore) -> Self {
        Self {
            repository,
            session,
        }
    }

    /// Validates the credentials, logs in and stores the session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed email or empty password,
    /// without calling the backend.
    /// Returns [`AppError::Unauthorized`] if the backend rejects the login.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession, AppError> {
        request.validate()?;

        let session = self
            .repository
            .login(request.email.trim(), &request.password)
            .await?;

        tracing::info!(email = %session.email, role = %session.role, "Admin logged in");
        self.session.set(session.clone());

        Ok(session)
    }

    /// Drops the stored session.
    pub fn logout(&self) {
        if self.session.clear().is_some() {
            tracing::info!("Admin logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAuthRepository;
    use serde_json::json;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn session() -> AuthSession {
        AuthSession {
            token: "jwt".to_string(),
            refresh_token: None,
            role: "ADMIN".to_string(),
            shop_id: None,
            email: "admin@shop.in".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let mut mock_repo = MockAuthRepository::new();
        mock_repo
            .expect_login()
            .withf(|email, password| email == "admin@shop.in" && password == "secret")
            .times(1)
            .returning(|_, _| Ok(session()));

        let store = SessionStore::default();
        let service = AuthService::new(Arc::new(mock_repo), store.clone());

        service.login(&request("admin@shop.in", "secret")).await.unwrap();

        assert!(service.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("jwt"));

        service.logout();
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_invalid_request_skips_backend() {
        let mut mock_repo = MockAuthRepository::new();
        mock_repo.expect_login().never();

        let service = AuthService::new(Arc::new(mock_repo), SessionStore::default());
        let result = service.login(&request("nope", "")).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_no_session() {
        let mut mock_repo = MockAuthRepository::new();
        mock_repo
            .expect_login()
            .times(1)
            .returning(|_, _| Err(AppError::unauthorized("Invalid credentials", json!({}))));

        let service = AuthService::new(Arc::new(mock_repo), SessionStore::default());
        let result = service.login(&request("admin@shop.in", "wrong")).await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
        assert!(!service.is_authenticated());
    }
}
