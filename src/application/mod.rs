//! Application layer services.
//!
//! Services fetch through the repository traits, then hand the data to the
//! pure functions in [`crate::analytics`]. They never talk HTTP directly.
//!
//! # Available Services
//!
//! - [`services::ChartService`] - Pie slices for every distribution chart
//! - [`services::ActivityService`] - Inactive Users report and table paging
//! - [`services::EndpointService`] - Plan-endpoint manager
//! - [`services::AuthService`] - Admin login and logout

pub mod services;
