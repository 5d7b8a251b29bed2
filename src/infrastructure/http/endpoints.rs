//! HTTP implementation of the endpoint catalog repository.

use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

use super::ApiClient;
use crate::api::dto::{
    ApiEnvelope, ImportEndpointItem, PlanEndpointDto, ReplacePlanEndpointsRequest,
    SubscriptionPlanDto,
};
use crate::domain::entities::{EndpointDescriptor, NewEndpoint, SubscriptionPlan};
use crate::domain::repositories::EndpointRepository;
use crate::error::AppError;

/// Catalog, discovery and plan-grant calls under `/api/subscriptions`.
pub struct HttpEndpointRepository {
    client: Arc<ApiClient>,
}

impl HttpEndpointRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn endpoints_at(&self, segments: &[&str]) -> Result<Vec<EndpointDescriptor>, AppError> {
        let envelope: ApiEnvelope<Vec<PlanEndpointDto>> = self.client.get(segments, &[]).await?;

        Ok(envelope
            .into_payload_or_default()
            .into_iter()
            .map(EndpointDescriptor::from)
            .collect())
    }
}

#[async_trait]
impl EndpointRepository for HttpEndpointRepository {
    async fn list_catalog(&self) -> Result<Vec<EndpointDescriptor>, AppError> {
        self.endpoints_at(&["api", "subscriptions", "admin", "endpoints"])
            .await
    }

    async fn discover(&self) -> Result<Vec<NewEndpoint>, AppError> {
        let envelope: ApiEnvelope<Vec<ImportEndpointItem>> =
            self.client.get(&["api", "endpoints", "discover"], &[]).await?;

        Ok(envelope
            .into_payload_or_default()
            .into_iter()
            .map(NewEndpoint::from)
            .collect())
    }

    async fn import_catalog(&self, endpoints: Vec<NewEndpoint>) -> Result<(), AppError> {
        let items: Vec<ImportEndpointItem> = endpoints.into_iter().map(Into::into).collect();

        self.client
            .send_discarding(
                Method::POST,
                &["api", "subscriptions", "admin", "endpoints", "import"],
                &items,
            )
            .await
    }

    async fn list_plans(&self) -> Result<Vec<SubscriptionPlan>, AppError> {
        let envelope: ApiEnvelope<Vec<SubscriptionPlanDto>> =
            self.client.get(&["api", "subscriptions", "plans"], &[]).await?;

        Ok(envelope
            .into_payload_or_default()
            .into_iter()
            .map(SubscriptionPlan::from)
            .collect())
    }

    async fn list_plan_endpoints(
        &self,
        plan_code: &str,
    ) -> Result<Vec<EndpointDescriptor>, AppError> {
        self.endpoints_at(&["api", "subscriptions", "plans", plan_code, "endpoints"])
            .await
    }

    async fn replace_plan_endpoints(
        &self,
        plan_code: &str,
        endpoint_ids: Vec<i64>,
    ) -> Result<(), AppError> {
        self.client
            .send_discarding(
                Method::PUT,
                &["api", "subscriptions", "plans", plan_code, "endpoints"],
                &ReplacePlanEndpointsRequest { endpoint_ids },
            )
            .await
    }
}
