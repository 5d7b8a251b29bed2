//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Backend REST API client and repositories

pub mod http;
