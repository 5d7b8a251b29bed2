//! HTTP implementation of the distribution repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use super::ApiClient;
use crate::api::dto::{
    ApiEnvelope, CategoryDistributionDto, CompanyDistributionDto, MonthlyCustomersDto,
    MonthlySalesDto, MonthlyUsersDto, StateDistributionDto, SubscriptionSummaryDto, TopModelsDto,
    VillageDistributionDto, customer_months,
};
use crate::domain::entities::{CustomerMonth, LabeledValue, MonthlyCount, SalesMonth};
use crate::domain::repositories::{DistributionRepository, MonthlyUsersFilter, SalesFilter};
use crate::error::AppError;

const SALES_ANALYTICS: [&str; 3] = ["api", "admin", "sales-analytics"];

/// Distribution and monthly series endpoints spread over the user, sales,
/// customer and subscription admin APIs.
pub struct HttpDistributionRepository {
    client: Arc<ApiClient>,
}

impl HttpDistributionRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn sales<T>(&self, report: &str, filter: &SalesFilter) -> Result<T, AppError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let [a, b, c] = SALES_ANALYTICS;
        let envelope: ApiEnvelope<T> = self
            .client
            .get(&[a, b, c, report], &filter.query_pairs())
            .await?;

        Ok(envelope.into_payload_or_default())
    }

    async fn subscription_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<SubscriptionSummaryDto, AppError> {
        let query = [
            ("startDate", start.format("%Y-%m-%d").to_string()),
            ("endDate", end.format("%Y-%m-%d").to_string()),
        ];
        let envelope: ApiEnvelope<SubscriptionSummaryDto> = self
            .client
            .get(
                &["api", "subscriptions", "admin", "analytics", "summary"],
                &query,
            )
            .await?;

        Ok(envelope.into_payload_or_default())
    }
}

#[async_trait]
impl DistributionRepository for HttpDistributionRepository {
    async fn state_distribution(&self) -> Result<Vec<LabeledValue>, AppError> {
        let envelope: ApiEnvelope<Vec<StateDistributionDto>> = self
            .client
            .get(
                &["users", "admin", "users", "stats", "distribution", "state"],
                &[],
            )
            .await?;

        Ok(envelope
            .into_payload_or_default()
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn category_sales(&self, filter: &SalesFilter) -> Result<Vec<LabeledValue>, AppError> {
        let dto: CategoryDistributionDto = self.sales("category-distribution", filter).await?;
        Ok(dto.category_sales.into_iter().map(Into::into).collect())
    }

    async fn company_sales(&self, filter: &SalesFilter) -> Result<Vec<LabeledValue>, AppError> {
        let dto: CompanyDistributionDto = self.sales("company-distribution", filter).await?;
        Ok(dto.company_sales.into_iter().map(Into::into).collect())
    }

    async fn top_models(&self, filter: &SalesFilter) -> Result<Vec<LabeledValue>, AppError> {
        let dto: TopModelsDto = self.sales("top-models", filter).await?;
        Ok(dto.top_models.into_iter().map(Into::into).collect())
    }

    async fn village_distribution(
        &self,
        year: Option<i32>,
    ) -> Result<Vec<LabeledValue>, AppError> {
        let query: Vec<(&str, String)> = year.map(|y| ("year", y.to_string())).into_iter().collect();
        let envelope: ApiEnvelope<Vec<VillageDistributionDto>> = self
            .client
            .get(
                &["api", "customers", "admin", "stats", "distribution", "village"],
                &query,
            )
            .await?;

        Ok(envelope
            .into_payload_or_default()
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn plan_distribution(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LabeledValue>, AppError> {
        Ok(self.subscription_summary(start, end).await?.into_values())
    }

    async fn monthly_users(
        &self,
        filter: &MonthlyUsersFilter,
    ) -> Result<Vec<MonthlyCount>, AppError> {
        let envelope: ApiEnvelope<Vec<MonthlyUsersDto>> = self
            .client
            .get(
                &["users", "admin", "users", "stats", "monthly"],
                &filter.query_pairs(),
            )
            .await?;

        Ok(envelope
            .into_payload_or_default()
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn monthly_revenue(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MonthlyCount>, AppError> {
        Ok(self
            .subscription_summary(start, end)
            .await?
            .into_monthly_revenue())
    }

    async fn monthly_customers(&self, year: Option<i32>) -> Result<Vec<CustomerMonth>, AppError> {
        let query: Vec<(&str, String)> = year.map(|y| ("year", y.to_string())).into_iter().collect();
        let envelope: ApiEnvelope<Vec<Option<MonthlyCustomersDto>>> = self
            .client
            .get(&["api", "customers", "admin", "stats", "monthly"], &query)
            .await?;

        Ok(customer_months(envelope.into_payload_or_default()))
    }

    async fn monthly_sales(&self, filter: &SalesFilter) -> Result<Vec<SalesMonth>, AppError> {
        let dto: MonthlySalesDto = self.sales("monthly-sales", &filter.monthly()).await?;
        Ok(dto.monthly_data.into_iter().map(Into::into).collect())
    }
}
