//! Repository trait for the distributions and monthly series behind the
//! dashboard charts.

use crate::domain::entities::{CustomerMonth, LabeledValue, MonthlyCount, SalesMonth};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Filter criteria for the sales analytics distributions.
///
/// Every field is optional; unset fields are left out of the request and
/// the backend falls back to its own defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub company: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

impl SalesFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the distribution to a calendar year, and optionally a month in it.
    pub fn with_period(mut self, year: Option<i32>, month: Option<u32>) -> Self {
        self.year = year;
        self.month = month;
        self
    }

    /// Restricts the distribution to an inclusive date range.
    pub fn with_date_range(
        mut self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn with_company(mut self, company: Option<String>) -> Self {
        self.company = company;
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Caps the number of rows, used by the top-models chart.
    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// The part of the filter the monthly sales series accepts: the year,
    /// company and category.
    pub fn monthly(&self) -> Self {
        Self {
            year: self.year,
            company: self.company.clone(),
            category: self.category.clone(),
            ..Self::default()
        }
    }

    /// Query pairs for the set fields, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        if let Some(month) = self.month {
            pairs.push(("month", month.to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(company) = self.company.as_ref().filter(|c| !c.is_empty()) {
            pairs.push(("company", company.clone()));
        }
        if let Some(category) = self.category.as_ref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Filter for the dashboard's new-users-per-month chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyUsersFilter {
    pub year: Option<i32>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub referral_code: Option<String>,
}

impl MonthlyUsersFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub fn with_state(mut self, state: Option<String>) -> Self {
        self.state = state;
        self
    }

    pub fn with_pincode(mut self, pincode: Option<String>) -> Self {
        self.pincode = pincode;
        self
    }

    pub fn with_referral_code(mut self, referral_code: Option<String>) -> Self {
        self.referral_code = referral_code;
        self
    }

    /// Query pairs for the set, non-blank fields.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        let text = [
            ("state", &self.state),
            ("pincode", &self.pincode),
            ("referralCode", &self.referral_code),
        ];
        for (key, value) in text {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((key, value.to_string()));
            }
        }
        pairs
    }
}

/// Repository interface for the chart data: labelled counts and amounts
/// shown as pie charts, and month-by-month series.
///
/// Distribution methods return raw `(label, value)` pairs; reduction into
/// slices happens in [`crate::application::services::ChartService`]. Series
/// come back in the backend's month order.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpDistributionRepository`] - REST backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DistributionRepository: Send + Sync {
    /// Users per state.
    async fn state_distribution(&self) -> Result<Vec<LabeledValue>, AppError>;

    /// Sales amount per product category.
    async fn category_sales(&self, filter: &SalesFilter) -> Result<Vec<LabeledValue>, AppError>;

    /// Sales amount per company.
    async fn company_sales(&self, filter: &SalesFilter) -> Result<Vec<LabeledValue>, AppError>;

    /// Sales amount of the best-selling models.
    async fn top_models(&self, filter: &SalesFilter) -> Result<Vec<LabeledValue>, AppError>;

    /// Customers per village, optionally for one year.
    async fn village_distribution(&self, year: Option<i32>)
    -> Result<Vec<LabeledValue>, AppError>;

    /// Active subscriptions per plan within a date range.
    async fn plan_distribution(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LabeledValue>, AppError>;

    /// New users per month.
    async fn monthly_users(
        &self,
        filter: &MonthlyUsersFilter,
    ) -> Result<Vec<MonthlyCount>, AppError>;

    /// Subscriptions per month within a date range.
    async fn monthly_revenue(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MonthlyCount>, AppError>;

    /// New, repeat and total customers per month, optionally for one year.
    async fn monthly_customers(&self, year: Option<i32>) -> Result<Vec<CustomerMonth>, AppError>;

    /// Sales amount and quantity per month.
    async fn monthly_sales(&self, filter: &SalesFilter) -> Result<Vec<SalesMonth>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_query() {
        assert!(SalesFilter::new().query_pairs().is_empty());
    }

    #[test]
    fn test_filter_query_pairs() {
        let filter = SalesFilter::new()
            .with_period(Some(2026), Some(3))
            .with_date_range(NaiveDate::from_ymd_opt(2026, 3, 1), None)
            .with_company(Some(String::new()))
            .with_category(Some("Mobiles".to_string()))
            .with_limit(Some(5));

        assert_eq!(
            filter.query_pairs(),
            vec![
                ("year", "2026".to_string()),
                ("month", "3".to_string()),
                ("startDate", "2026-03-01".to_string()),
                ("category", "Mobiles".to_string()),
                ("limit", "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_monthly_keeps_year_company_category() {
        let filter = SalesFilter::new()
            .with_period(Some(2026), Some(3))
            .with_date_range(NaiveDate::from_ymd_opt(2026, 3, 1), None)
            .with_company(Some("Acme".to_string()))
            .with_category(Some("Mobiles".to_string()))
            .with_limit(Some(5));

        assert_eq!(
            filter.monthly().query_pairs(),
            vec![
                ("year", "2026".to_string()),
                ("company", "Acme".to_string()),
                ("category", "Mobiles".to_string()),
            ]
        );
    }

    #[test]
    fn test_monthly_users_query_skips_blank_values() {
        let filter = MonthlyUsersFilter::new()
            .with_year(Some(2026))
            .with_state(Some("Gujarat".to_string()))
            .with_pincode(Some("  ".to_string()))
            .with_referral_code(Some("REF10".to_string()));

        assert_eq!(
            filter.query_pairs(),
            vec![
                ("year", "2026".to_string()),
                ("state", "Gujarat".to_string()),
                ("referralCode", "REF10".to_string()),
            ]
        );
        assert!(MonthlyUsersFilter::new().query_pairs().is_empty());
    }
}
