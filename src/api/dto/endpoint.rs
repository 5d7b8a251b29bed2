//! DTOs for the subscription endpoint catalog and plans.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{EndpointDescriptor, HttpMethod, NewEndpoint, SubscriptionPlan};

/// An endpoint row, from the catalog or from a plan's grants.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEndpointDto {
    pub id: i64,
    pub http_method: HttpMethod,
    #[serde(default)]
    pub path_pattern: String,
}

impl From<PlanEndpointDto> for EndpointDescriptor {
    fn from(dto: PlanEndpointDto) -> Self {
        EndpointDescriptor::new(dto.id, dto.http_method, dto.path_pattern)
    }
}

/// A route as reported by discovery and sent back for import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEndpointItem {
    pub http_method: HttpMethod,
    pub path_pattern: String,
}

impl From<ImportEndpointItem> for NewEndpoint {
    fn from(item: ImportEndpointItem) -> Self {
        NewEndpoint {
            http_method: item.http_method,
            path_pattern: item.path_pattern,
        }
    }
}

impl From<NewEndpoint> for ImportEndpointItem {
    fn from(endpoint: NewEndpoint) -> Self {
        Self {
            http_method: endpoint.http_method,
            path_pattern: endpoint.path_pattern,
        }
    }
}

/// Body of `PUT /api/subscriptions/plans/{code}/endpoints`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacePlanEndpointsRequest {
    pub endpoint_ids: Vec<i64>,
}

/// A subscription plan as listed by `GET /api/subscriptions/plans`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlanDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_monthly: Option<f64>,
    #[serde(default)]
    pub price_yearly: Option<f64>,
    #[serde(default)]
    pub trial_days: Option<u32>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl From<SubscriptionPlanDto> for SubscriptionPlan {
    fn from(dto: SubscriptionPlanDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_else(|| dto.code.clone()),
            code: dto.code,
            description: dto.description,
            price_monthly: dto.price_monthly.unwrap_or(0.0),
            price_yearly: dto.price_yearly.unwrap_or(0.0),
            trial_days: dto.trial_days.unwrap_or(0),
            active: dto.active.unwrap_or(true),
        }
    }
}
