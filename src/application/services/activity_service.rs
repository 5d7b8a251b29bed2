//! Inactive Users screen: classification, ratio chart, trend and table.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use serde_json::json;
use std::fmt::Display;
use std::sync::Arc;

use crate::analytics::{classify, inactive_trend, reduce_slices};
use crate::api::dto::{Page, PageParams};
use crate::domain::entities::{
    ChartOptions, InactiveUserRow, InactivityThreshold, LabeledValue, Slice, TrendPoint,
    UserActivity,
};
use crate::domain::repositories::ActivityRepository;
use crate::error::AppError;

/// Everything the Inactive Users screen shows for one threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InactivityReport {
    #[serde(skip)]
    pub threshold: InactivityThreshold,
    pub threshold_minutes: i64,
    pub total: usize,
    pub inactive: usize,
    pub active: usize,
    /// Inactive share in percent, one decimal.
    pub inactive_percent: f64,
    /// `[Inactive, Active]` pie slices.
    pub ratio: Vec<Slice>,
    pub trend: Vec<TrendPoint>,
    /// Inactive users in backend order.
    pub rows: Vec<InactiveUserRow>,
}

impl InactivityReport {
    /// Builds the report from fetched statuses as of `now`.
    ///
    /// `now` fixes both the trend boundaries and the timezone of its labels.
    pub fn build<Tz>(
        users: &[UserActivity],
        threshold: InactivityThreshold,
        now: DateTime<Tz>,
        chart_options: &ChartOptions,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let threshold_minutes = threshold.minutes();
        let breakdown = classify(users, threshold_minutes);

        let ratio = reduce_slices(
            &[
                LabeledValue::new("Inactive", breakdown.inactive_count() as f64),
                LabeledValue::new("Active", breakdown.active_count as f64),
            ],
            chart_options,
        );

        Self {
            threshold,
            threshold_minutes,
            total: breakdown.total,
            inactive: breakdown.inactive_count(),
            active: breakdown.active_count,
            inactive_percent: breakdown.inactive_percent(),
            ratio,
            trend: inactive_trend(users, now),
            rows: breakdown
                .inactive
                .iter()
                .map(|user| InactiveUserRow::from(*user))
                .collect(),
        }
    }

    /// One page of the inactive-user table.
    ///
    /// A page past the end is empty, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the rows-per-page value is out of range.
    pub fn page(&self, params: &PageParams) -> Result<Page<InactiveUserRow>, AppError> {
        let (offset, limit) = params
            .validate_and_get_offset_limit()
            .map_err(|e| AppError::bad_request(e, json!({ "rowsPerPage": params.rows_per_page })))?;

        Ok(Page {
            items: self.rows.iter().skip(offset).take(limit).cloned().collect(),
            page: params.page.unwrap_or(0),
            rows_per_page: limit as u32,
            total: self.rows.len(),
        })
    }
}

/// Loads activity statuses and turns them into [`InactivityReport`]s.
pub struct ActivityService<R: ActivityRepository> {
    repository: Arc<R>,
    chart_options: ChartOptions,
    default_threshold: InactivityThreshold,
}

impl<R: ActivityRepository> ActivityService<R> {
    pub fn new(
        repository: Arc<R>,
        chart_options: ChartOptions,
        default_threshold: InactivityThreshold,
    ) -> Self {
        Self {
            repository,
            chart_options,
            default_threshold,
        }
    }

    /// Threshold the screen opens with.
    pub fn default_threshold(&self) -> InactivityThreshold {
        self.default_threshold
    }

    /// Quick-pick thresholds: 2 days and 7 days.
    pub fn presets() -> [InactivityThreshold; 2] {
        [InactivityThreshold::two_days(), InactivityThreshold::seven_days()]
    }

    /// Fetches every user's activity status.
    pub async fn statuses(&self) -> Result<Vec<UserActivity>, AppError> {
        let users = self.repository.all_statuses().await?;
        tracing::debug!(users = users.len(), "Loaded activity statuses");
        Ok(users)
    }

    /// Fetches statuses and builds a report as of the local time now.
    ///
    /// Uses the default threshold when `threshold` is `None`.
    pub async fn report(
        &self,
        threshold: Option<InactivityThreshold>,
    ) -> Result<InactivityReport, AppError> {
        let users = self.statuses().await?;
        let report = self.report_for(&users, threshold, Local::now());

        tracing::info!(
            total = report.total,
            inactive = report.inactive,
            threshold_minutes = report.threshold_minutes,
            "Built inactivity report"
        );

        Ok(report)
    }

    /// Builds a report from statuses already fetched.
    ///
    /// Changing the threshold on screen calls this again without refetching.
    pub fn report_for<Tz>(
        &self,
        users: &[UserActivity],
        threshold: Option<InactivityThreshold>,
        now: DateTime<Tz>,
    ) -> InactivityReport
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        InactivityReport::build(
            users,
            threshold.unwrap_or(self.default_threshold),
            now,
            &self.chart_options,
        )
    }
}
