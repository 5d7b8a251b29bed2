//! Repository trait for the subscription endpoint catalog and plan access.

use crate::domain::entities::{EndpointDescriptor, NewEndpoint, SubscriptionPlan};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the endpoint catalog and per-plan grants.
///
/// Catalog endpoints and plan endpoints carry independent ids; callers join
/// them on the (method, path) route.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpEndpointRepository`] - REST backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EndpointRepository: Send + Sync {
    /// Lists every endpoint in the subscription catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] or [`AppError::Internal`] on backend failures.
    async fn list_catalog(&self) -> Result<Vec<EndpointDescriptor>, AppError>;

    /// Asks the backend to enumerate its own routes.
    ///
    /// The result is not stored; pass it to [`Self::import_catalog`].
    async fn discover(&self) -> Result<Vec<NewEndpoint>, AppError>;

    /// Adds discovered routes to the catalog.
    async fn import_catalog(&self, endpoints: Vec<NewEndpoint>) -> Result<(), AppError>;

    /// Lists all subscription plans.
    async fn list_plans(&self) -> Result<Vec<SubscriptionPlan>, AppError>;

    /// Lists the endpoints currently granted to a plan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan code is unknown.
    async fn list_plan_endpoints(&self, plan_code: &str)
    -> Result<Vec<EndpointDescriptor>, AppError>;

    /// Replaces the plan's grants with the given catalog endpoint ids.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan code is unknown.
    /// Returns [`AppError::Validation`] if the backend rejects an id.
    async fn replace_plan_endpoints(
        &self,
        plan_code: &str,
        endpoint_ids: Vec<i64>,
    ) -> Result<(), AppError>;
}
