//! Utility functions for presentation and configuration.
//!
//! - [`base_url`] - Backend URL normalization and masking
//! - [`chart_format`] - Legend truncation, Indian number formatting, tooltips
//! - [`color`] - Slice palette and theme colours

pub mod base_url;
pub mod chart_format;
pub mod color;
