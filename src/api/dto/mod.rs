//! Typed backend payloads.
//!
//! Every response the dashboard reads is decoded into one of these types
//! and converted into domain entities here, at the boundary. Request
//! bodies are validated with `validator` before they leave the client.

pub mod activity;
pub mod auth;
pub mod distribution;
pub mod endpoint;
pub mod envelope;
pub mod lenient;
pub mod pagination;
pub mod series;

pub use activity::UserActivityStatusDto;
pub use auth::{LoginPayload, LoginRequest};
pub use distribution::{
    CategoryDistributionDto, CompanyDistributionDto, StateDistributionDto, SubscriptionSummaryDto,
    TopModelsDto, VillageDistributionDto,
};
pub use endpoint::{
    ImportEndpointItem, PlanEndpointDto, ReplacePlanEndpointsRequest, SubscriptionPlanDto,
};
pub use envelope::ApiEnvelope;
pub use pagination::{Page, PageParams};
pub use series::{
    MonthlyCustomersDto, MonthlySalesDto, MonthlyUsersDto, SalesMonthDto, customer_months,
};
