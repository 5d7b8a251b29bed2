//! DTOs for the monthly series on the dashboard, customer and sales screens.

use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::domain::entities::{CustomerMonth, MonthlyCount, SalesMonth};

/// Picks a month's display label: its name, then `"Month N"`, then `"Unknown"`.
pub fn month_label(name: Option<String>, number: Option<u32>) -> String {
    match (name.filter(|n| !n.trim().is_empty()), number) {
        (Some(name), _) => name,
        (None, Some(number)) => format!("Month {number}"),
        (None, None) => "Unknown".to_string(),
    }
}

/// New users in one month, from `/users/admin/users/stats/monthly`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyUsersDto {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub month_name: Option<String>,
    #[serde(default)]
    pub user_count: Option<f64>,
}

impl From<MonthlyUsersDto> for MonthlyCount {
    fn from(dto: MonthlyUsersDto) -> Self {
        MonthlyCount::new(
            month_label(dto.month_name, dto.month),
            dto.user_count.unwrap_or(0.0),
        )
    }
}

/// Customer counts for one month, from `/api/customers/admin/stats/monthly`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCustomersDto {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub month_name: Option<String>,
    #[serde(default)]
    pub new_customers: Option<f64>,
    #[serde(default)]
    pub repeat_customers: Option<f64>,
    #[serde(default)]
    pub total_customers: Option<f64>,
}

impl MonthlyCustomersDto {
    /// Converts the row, or `None` when it names no month at all.
    pub fn into_month(self) -> Option<CustomerMonth> {
        let has_name = self.month_name.as_deref().is_some_and(|n| !n.trim().is_empty());
        if !has_name && self.month.is_none() {
            return None;
        }

        Some(CustomerMonth {
            month: month_label(self.month_name, self.month),
            new_customers: self.new_customers.unwrap_or(0.0),
            repeat_customers: self.repeat_customers.unwrap_or(0.0),
            total_customers: self.total_customers.unwrap_or(0.0),
        })
    }
}

/// Converts a monthly customer payload, skipping null and unnamed rows.
pub fn customer_months(rows: Vec<Option<MonthlyCustomersDto>>) -> Vec<CustomerMonth> {
    rows.into_iter()
        .flatten()
        .filter_map(MonthlyCustomersDto::into_month)
        .collect()
}

/// Sales per month, from `/api/admin/sales-analytics/monthly-sales`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySalesDto {
    #[serde(default)]
    pub monthly_data: Vec<SalesMonthDto>,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMonthDto {
    #[serde(default)]
    pub month: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub month_number: Option<u32>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub total_quantity: Option<f64>,
}

impl From<SalesMonthDto> for SalesMonth {
    fn from(dto: SalesMonthDto) -> Self {
        SalesMonth {
            month: month_label(dto.month, dto.month_number),
            amount: dto.total_amount.unwrap_or(0.0),
            quantity: dto.total_quantity.unwrap_or(0.0),
        }
    }
}
