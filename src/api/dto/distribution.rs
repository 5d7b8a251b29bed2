//! DTOs for the distributions shown as pie charts.
//!
//! Each converts into plain [`LabeledValue`]s with the dashboard's
//! fallbacks for missing labels and amounts.

use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::domain::entities::{LabeledValue, MonthlyCount};

const UNKNOWN: &str = "Unknown";

fn label_or(label: Option<String>, fallback: &str) -> String {
    label
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Users per state, from `/users/admin/users/stats/distribution/state`.
#[derive(Debug, Clone, Deserialize)]
pub struct StateDistributionDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub count: Option<f64>,
    #[serde(default)]
    pub percentage: Option<f64>,
}

impl From<StateDistributionDto> for LabeledValue {
    fn from(dto: StateDistributionDto) -> Self {
        LabeledValue::new(label_or(dto.name, UNKNOWN), dto.count.unwrap_or(0.0))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySaleDto {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub total_quantity: Option<f64>,
}

impl From<CategorySaleDto> for LabeledValue {
    fn from(dto: CategorySaleDto) -> Self {
        LabeledValue::new(label_or(dto.category, UNKNOWN), dto.total_amount.unwrap_or(0.0))
    }
}

/// Payload of `/api/admin/sales-analytics/category-distribution`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDistributionDto {
    #[serde(default)]
    pub category_sales: Vec<CategorySaleDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySaleDto {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub total_quantity: Option<f64>,
}

impl From<CompanySaleDto> for LabeledValue {
    fn from(dto: CompanySaleDto) -> Self {
        LabeledValue::new(label_or(dto.company, UNKNOWN), dto.total_amount.unwrap_or(0.0))
    }
}

/// Payload of `/api/admin/sales-analytics/company-distribution`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDistributionDto {
    #[serde(default)]
    pub company_sales: Vec<CompanySaleDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSaleDto {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

impl From<ModelSaleDto> for LabeledValue {
    fn from(dto: ModelSaleDto) -> Self {
        LabeledValue::new(label_or(dto.model, "N/A"), dto.total_amount.unwrap_or(0.0))
    }
}

/// Payload of `/api/admin/sales-analytics/top-models`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopModelsDto {
    #[serde(default)]
    pub top_models: Vec<ModelSaleDto>,
}

/// Customers per village, from `/api/customers/admin/stats/distribution/village`.
#[derive(Debug, Clone, Deserialize)]
pub struct VillageDistributionDto {
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub count: Option<f64>,
}

impl From<VillageDistributionDto> for LabeledValue {
    fn from(dto: VillageDistributionDto) -> Self {
        LabeledValue::new(label_or(dto.village, UNKNOWN), dto.count.unwrap_or(0.0))
    }
}

/// Subscription analytics summary: per-plan counts and the monthly series.
///
/// `activeByPlan` and `monthlyRevenue` are lists of `[label, count]` pairs
/// where the count may arrive as a number or a numeric string.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummaryDto {
    #[serde_as(as = "Vec<(_, Option<PickFirst<(_, DisplayFromStr)>>)>")]
    #[serde(default)]
    pub active_by_plan: Vec<(Option<String>, Option<f64>)>,
    #[serde_as(as = "Vec<(_, Option<PickFirst<(_, DisplayFromStr)>>)>")]
    #[serde(default)]
    pub monthly_revenue: Vec<(Option<String>, Option<f64>)>,
}

impl SubscriptionSummaryDto {
    pub fn into_values(self) -> Vec<LabeledValue> {
        self.active_by_plan
            .into_iter()
            .map(|(name, count)| LabeledValue::new(label_or(name, UNKNOWN), count.unwrap_or(0.0)))
            .collect()
    }

    pub fn into_monthly_revenue(self) -> Vec<MonthlyCount> {
        self.monthly_revenue
            .into_iter()
            .map(|(month, count)| MonthlyCount::new(label_or(month, UNKNOWN), count.unwrap_or(0.0)))
            .collect()
    }
}
