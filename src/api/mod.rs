//! Backend API boundary.
//!
//! # Modules
//!
//! - [`dto`] - Request and response payloads, and their conversion into domain types

pub mod dto;
