//! Repository trait for per-user activity status.

use crate::domain::entities::UserActivity;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the backend's user activity tracker.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpActivityRepository`] - REST backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Fetches the activity status of every user.
    ///
    /// Users the backend never saw active come back with
    /// [`crate::domain::entities::NEVER_ACTIVE`] minutes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the session is missing or expired.
    /// Returns [`AppError::Upstream`] or [`AppError::Internal`] on backend failures.
    async fn all_statuses(&self) -> Result<Vec<UserActivity>, AppError>;
}
