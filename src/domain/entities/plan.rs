//! Subscription plan entity.

/// Code of the built-in trial plan.
pub const TRIAL_PLAN_CODE: &str = "TRIAL";

/// A subscription plan offered to shops.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPlan {
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price_monthly: f64,
    pub price_yearly: f64,
    pub trial_days: u32,
    pub active: bool,
}

impl SubscriptionPlan {
    /// Stand-in for the TRIAL plan when the backend has not created it yet.
    ///
    /// The trial is effectively lifetime: 36500 days.
    pub fn trial_placeholder() -> Self {
        Self {
            id: None,
            code: TRIAL_PLAN_CODE.to_string(),
            name: "Default Trial Plan".to_string(),
            description: Some(
                "Auto-created lifetime trial subscription for new users".to_string(),
            ),
            price_monthly: 0.0,
            price_yearly: 0.0,
            trial_days: 36_500,
            active: true,
        }
    }

    pub fn is_trial(&self) -> bool {
        self.code == TRIAL_PLAN_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_placeholder() {
        let plan = SubscriptionPlan::trial_placeholder();

        assert!(plan.is_trial());
        assert!(plan.active);
        assert!(plan.id.is_none());
        assert_eq!(plan.trial_days, 36_500);
        assert_eq!(plan.price_monthly, 0.0);
        assert_eq!(plan.price_yearly, 0.0);
    }
}
