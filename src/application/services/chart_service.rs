//! Chart data for the dashboard, sales, customer and subscription screens:
//! pie slices and monthly series.

use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

use crate::analytics::reduce_slices;
use crate::domain::entities::{
    ChartOptions, CustomerMonth, LabeledValue, MonthlyCount, SalesMonth, Slice,
};
use crate::domain::repositories::{DistributionRepository, MonthlyUsersFilter, SalesFilter};
use crate::error::AppError;

/// Rows the dashboard's "Top States" chart takes before reduction.
pub const TOP_STATES: usize = 6;
/// Rows the customer analytics village chart takes before reduction.
pub const TOP_VILLAGES: usize = 10;

/// Fetches distributions and reduces them to pie slices, and fetches the
/// monthly series as reported.
pub struct ChartService<R: DistributionRepository> {
    repository: Arc<R>,
    options: ChartOptions,
}

impl<R: DistributionRepository> ChartService<R> {
    pub fn new(repository: Arc<R>, options: ChartOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Reduces already-fetched values with the configured options.
    pub fn reduce(&self, values: &[LabeledValue]) -> Vec<Slice> {
        reduce_slices(values, &self.options)
    }

    fn reduce_top(&self, mut values: Vec<LabeledValue>, top: usize) -> Vec<Slice> {
        values.truncate(top);
        self.reduce(&values)
    }

    /// Users per state, first [`TOP_STATES`] rows as listed by the backend.
    pub async fn top_states(&self) -> Result<Vec<Slice>, AppError> {
        let values = self.repository.state_distribution().await?;
        tracing::debug!(rows = values.len(), "Loaded state distribution");

        Ok(self.reduce_top(values, TOP_STATES))
    }

    pub async fn category_sales(&self, filter: &SalesFilter) -> Result<Vec<Slice>, AppError> {
        let values = self.repository.category_sales(filter).await?;
        tracing::debug!(rows = values.len(), ?filter, "Loaded category sales");

        Ok(self.reduce(&values))
    }

    pub async fn company_sales(&self, filter: &SalesFilter) -> Result<Vec<Slice>, AppError> {
        let values = self.repository.company_sales(filter).await?;
        tracing::debug!(rows = values.len(), ?filter, "Loaded company sales");

        Ok(self.reduce(&values))
    }

    pub async fn top_models(&self, filter: &SalesFilter) -> Result<Vec<Slice>, AppError> {
        let values = self.repository.top_models(filter).await?;
        tracing::debug!(rows = values.len(), ?filter, "Loaded top models");

        Ok(self.reduce(&values))
    }

    /// Customers per village, first [`TOP_VILLAGES`] rows.
    pub async fn villages(&self, year: Option<i32>) -> Result<Vec<Slice>, AppError> {
        let values = self.repository.village_distribution(year).await?;
        tracing::debug!(rows = values.len(), year, "Loaded village distribution");

        Ok(self.reduce_top(values, TOP_VILLAGES))
    }

    /// Active subscriptions per plan between two dates, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `start` is after `end`.
    pub async fn plans(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Slice>, AppError> {
        check_range(start, end)?;

        let values = self.repository.plan_distribution(start, end).await?;
        tracing::debug!(rows = values.len(), %start, %end, "Loaded plan distribution");

        Ok(self.reduce(&values))
    }

    /// New users per month for the dashboard line chart.
    pub async fn user_trend(
        &self,
        filter: &MonthlyUsersFilter,
    ) -> Result<Vec<MonthlyCount>, AppError> {
        let series = self.repository.monthly_users(filter).await?;
        tracing::debug!(months = series.len(), ?filter, "Loaded monthly users");

        Ok(series)
    }

    /// Subscriptions per month between two dates, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `start` is after `end`.
    pub async fn subscription_trend(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MonthlyCount>, AppError> {
        check_range(start, end)?;

        let series = self.repository.monthly_revenue(start, end).await?;
        tracing::debug!(months = series.len(), %start, %end, "Loaded monthly subscriptions");

        Ok(series)
    }

    pub async fn customer_trend(&self, year: Option<i32>) -> Result<Vec<CustomerMonth>, AppError> {
        let series = self.repository.monthly_customers(year).await?;
        tracing::debug!(months = series.len(), year, "Loaded monthly customers");

        Ok(series)
    }

    /// Monthly sales; only the year, company and category of `filter` apply.
    pub async fn sales_trend(&self, filter: &SalesFilter) -> Result<Vec<SalesMonth>, AppError> {
        let series = self.repository.monthly_sales(filter).await?;
        tracing::debug!(months = series.len(), ?filter, "Loaded monthly sales");

        Ok(series)
    }
}

fn check_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::bad_request(
            "Start date must not be after end date",
            json!({ "startDate": start.to_string(), "endDate": end.to_string() }),
        ));
    }
    Ok(())
}
