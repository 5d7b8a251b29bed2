//! Business logic services for the application layer.

pub mod activity_service;
pub mod auth_service;
pub mod chart_service;
pub mod endpoint_service;

pub use activity_service::{ActivityService, InactivityReport};
pub use auth_service::AuthService;
pub use chart_service::ChartService;
pub use endpoint_service::{EndpointService, PlanEndpointEditor};
