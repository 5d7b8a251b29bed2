//! Repository trait for admin authentication.

use crate::domain::entities::AuthSession;
use crate::error::AppError;
use async_trait::async_trait;

/// Exchanges admin credentials for a backend session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Logs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on bad credentials.
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError>;
}
