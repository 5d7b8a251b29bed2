//! Month-by-month series behind the dashboard line and bar charts.
//!
//! Unlike pie slices these are not reduced: every month the backend reports
//! is kept, in the order it was reported.

use serde::Serialize;

/// A month label and one count, e.g. new users or new subscriptions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: f64,
}

impl MonthlyCount {
    pub fn new(month: impl Into<String>, count: f64) -> Self {
        Self {
            month: month.into(),
            count,
        }
    }
}

/// New, repeat and total customers for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerMonth {
    pub month: String,
    pub new_customers: f64,
    pub repeat_customers: f64,
    pub total_customers: f64,
}

/// Sales amount and quantity for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesMonth {
    pub month: String,
    pub amount: f64,
    pub quantity: f64,
}
