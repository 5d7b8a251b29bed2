//! Repository trait definitions for the domain layer.
//!
//! These traits abstract every call the dashboard makes to the backend so
//! services can be tested against mocks. Concrete implementations live in
//! `crate::infrastructure::http`.
//!
//! # Available Repositories
//!
//! - [`ActivityRepository`] - User activity status
//! - [`EndpointRepository`] - Endpoint catalog and plan grants
//! - [`DistributionRepository`] - Chart distributions and monthly series
//! - [`AuthRepository`] - Admin login
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`. See
//! `tests/http_repositories.rs` for the HTTP implementations against a fake
//! backend.

pub mod activity_repository;
pub mod auth_repository;
pub mod distribution_repository;
pub mod endpoint_repository;

pub use activity_repository::ActivityRepository;
pub use auth_repository::AuthRepository;
pub use distribution_repository::{DistributionRepository, MonthlyUsersFilter, SalesFilter};
pub use endpoint_repository::EndpointRepository;

#[cfg(test)]
pub use activity_repository::MockActivityRepository;
#[cfg(test)]
pub use auth_repository::MockAuthRepository;
#[cfg(test)]
pub use distribution_repository::MockDistributionRepository;
#[cfg(test)]
pub use endpoint_repository::MockEndpointRepository;
