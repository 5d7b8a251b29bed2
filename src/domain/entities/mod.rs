//! Core domain entities for the admin dashboard.
//!
//! Entities are plain data structures sourced from backend responses (after
//! conversion in [`crate::api::dto`]) or derived from them on the client.
//! Nothing here is persisted locally; every screen refetches on visit.
//!
//! # Entity Types
//!
//! - [`LabeledValue`] / [`Slice`] - Pie-chart inputs and outputs
//! - [`MonthlyCount`] / [`CustomerMonth`] / [`SalesMonth`] - Monthly series
//! - [`ActivityRecord`] / [`UserActivity`] - Last-activity facts per user
//! - [`EndpointDescriptor`] / [`CategoryGroup`] - Plan access catalog
//! - [`SubscriptionPlan`] - Plan metadata
//! - [`AuthSession`] / [`ThemeMode`] - Application context values

pub mod activity;
pub mod chart;
pub mod endpoint;
pub mod plan;
pub mod series;
pub mod session;

pub use activity::{
    ActivityRecord, InactiveUserRow, InactivityThreshold, NEVER_ACTIVE, ThresholdUnit,
    TrendPoint, UserActivity,
};
pub use chart::{ChartOptions, LabeledValue, OTHER_LABEL, Slice};
pub use endpoint::{CategoryGroup, EndpointCategory, EndpointDescriptor, HttpMethod, NewEndpoint};
pub use plan::{SubscriptionPlan, TRIAL_PLAN_CODE};
pub use series::{CustomerMonth, MonthlyCount, SalesMonth};
pub use session::{AuthSession, Theme, ThemeMode};
