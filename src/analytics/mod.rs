//! Client-side reductions applied to already-fetched backend data.
//!
//! Everything here is synchronous and pure: no I/O, no shared state, and the
//! same input always produces the same output. Services call these after a
//! fetch completes; malformed input is filtered rather than rejected.
//!
//! - [`slices`] - Pie-chart slice reduction with "Other" grouping
//! - [`activity`] - Inactivity classification and the two-week trend
//! - [`endpoints`] - Endpoint categorization, grouping and search
//! - [`selection`] - Plan endpoint selection state

pub mod activity;
pub mod endpoints;
pub mod selection;
pub mod slices;

pub use activity::{ActivityBreakdown, TREND_LOOKBACK_DAYS, classify, inactive_trend, is_inactive};
pub use endpoints::{categorize, filter_groups, group_endpoints};
pub use selection::EndpointSelection;
pub use slices::reduce_slices;
