//! Domain layer: entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Dashboard data structures
//! - [`repositories`] - Backend access trait definitions
//!
//! The domain layer depends on neither HTTP nor presentation code. Traits in
//! [`repositories`] are implemented over the REST API in
//! [`crate::infrastructure::http`] and consumed by
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
