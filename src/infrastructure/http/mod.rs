//! Repository implementations over the backend REST API.
//!
//! # Repositories
//!
//! - [`HttpActivityRepository`] - User activity status
//! - [`HttpEndpointRepository`] - Endpoint catalog and plan grants
//! - [`HttpDistributionRepository`] - Chart distributions and monthly series
//! - [`HttpAuthRepository`] - Admin login
//!
//! All of them share one [`ApiClient`].

pub mod activity;
pub mod auth;
pub mod client;
pub mod distribution;
pub mod endpoints;

pub use activity::HttpActivityRepository;
pub use auth::HttpAuthRepository;
pub use client::ApiClient;
pub use distribution::HttpDistributionRepository;
pub use endpoints::HttpEndpointRepository;
