//! # Shop Admin Analytics
//!
//! Client-side logic behind the shop-management admin dashboard: chart
//! reductions, user inactivity reports and the plan endpoint manager,
//! fetched from the shop backend's REST API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Analytics** ([`analytics`]) - Pure reductions over fetched data
//! - **Application Layer** ([`application`]) - Services combining fetches and reductions
//! - **Infrastructure Layer** ([`infrastructure`]) - REST client and repositories
//! - **API Layer** ([`api`]) - Typed backend payloads
//! - **Context** ([`state`]) - Session, theme and wired services
//!
//! ## Features
//!
//! - Pie-chart reduction with "Other" grouping and bounded slice counts
//! - Monthly user, subscription, customer and sales series
//! - Inactive user classification with a two-week trend
//! - Endpoint categorization, search and per-plan selection
//! - Retries with jittered backoff for read requests
//!
//! ## Quick Start
//!
//! ```no_run
//! use shop_admin_analytics::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let ctx = AppContext::start(shop_admin_analytics::config::load()?)?;
//! let states = ctx.chart_service().top_states().await?;
//! for slice in states {
//!     println!("{}: {:.1}%", slice.name, slice.percentage);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod analytics;
pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;
pub mod utils;

pub mod config;

pub use error::AppError;
pub use state::AppContext;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ActivityService, AuthService, ChartService, EndpointService, InactivityReport,
        PlanEndpointEditor,
    };
    pub use crate::domain::entities::{
        ChartOptions, EndpointDescriptor, InactivityThreshold, LabeledValue, Slice,
    };
    pub use crate::error::AppError;
    pub use crate::state::{AppContext, SessionStore, ThemeSettings};
}
