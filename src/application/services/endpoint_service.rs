//! Plan-endpoint manager: catalog loading, plan lookup and saving grants.

use serde_json::json;
use std::sync::Arc;

use crate::analytics::{EndpointSelection, filter_groups, group_endpoints};
use crate::domain::entities::{
    CategoryGroup, EndpointDescriptor, SubscriptionPlan, TRIAL_PLAN_CODE,
};
use crate::domain::repositories::EndpointRepository;
use crate::error::AppError;

/// State of the plan-endpoint manager for one plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEndpointEditor {
    /// The plan being edited; `None` if the backend does not know the code.
    pub plan: Option<SubscriptionPlan>,
    pub plan_code: String,
    pub catalog: Vec<EndpointDescriptor>,
    pub selection: EndpointSelection,
}

impl PlanEndpointEditor {
    /// Catalog grouped by category, in display order.
    pub fn groups(&self) -> Vec<CategoryGroup> {
        group_endpoints(&self.catalog)
    }

    /// Groups narrowed to the search box query.
    pub fn search(&self, query: &str) -> Vec<CategoryGroup> {
        filter_groups(&self.groups(), query)
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.catalog);
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }
}

/// Orchestrates the endpoint catalog and plan grants.
pub struct EndpointService<R: EndpointRepository> {
    repository: Arc<R>,
}

impl<R: EndpointRepository> EndpointService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the catalog, importing discovered routes first if it is empty.
    ///
    /// A failed discovery or import is logged and the (empty) catalog is
    /// returned; only a failure of the initial listing is an error.
    pub async fn load_catalog(&self) -> Result<Vec<EndpointDescriptor>, AppError> {
        let catalog = self.repository.list_catalog().await?;
        if !catalog.is_empty() {
            return Ok(catalog);
        }

        match self.auto_import().await {
            Ok(Some(imported)) => Ok(imported),
            Ok(None) => Ok(catalog),
            Err(e) => {
                tracing::warn!(error = %e, "Endpoint auto-import failed");
                Ok(catalog)
            }
        }
    }

    async fn auto_import(&self) -> Result<Option<Vec<EndpointDescriptor>>, AppError> {
        let discovered = self.repository.discover().await?;
        if discovered.is_empty() {
            tracing::info!("Endpoint discovery found nothing to import");
            return Ok(None);
        }

        let count = discovered.len();
        self.repository.import_catalog(discovered).await?;
        tracing::info!(count, "Imported discovered endpoints into the catalog");

        self.repository.list_catalog().await.map(Some)
    }

    /// Finds a plan by code.
    ///
    /// The TRIAL plan falls back to a placeholder when the backend has not
    /// created it yet; other unknown codes yield `None`.
    pub async fn find_plan(&self, code: &str) -> Result<Option<SubscriptionPlan>, AppError> {
        let plans = self.repository.list_plans().await?;
        let found = plans.into_iter().find(|p| p.code == code);

        Ok(match found {
            Some(plan) => Some(plan),
            None if code == TRIAL_PLAN_CODE => Some(SubscriptionPlan::trial_placeholder()),
            None => None,
        })
    }

    /// Loads everything the editor needs for `plan_code`.
    ///
    /// Plans and catalog are fetched concurrently; the plan's current grants
    /// are then matched against the catalog by route.
    pub async fn open_editor(&self, plan_code: &str) -> Result<PlanEndpointEditor, AppError> {
        let plan_code = require_plan_code(plan_code)?;

        let (plan, catalog) = tokio::join!(self.find_plan(plan_code), self.load_catalog());
        let (plan, catalog) = (plan?, catalog?);

        let assigned = self.repository.list_plan_endpoints(plan_code).await?;
        let selection = EndpointSelection::from_assigned(&catalog, &assigned);

        tracing::info!(
            plan = plan_code,
            assigned = assigned.len(),
            matched = selection.len(),
            catalog = catalog.len(),
            "Loaded plan endpoints"
        );

        Ok(PlanEndpointEditor {
            plan,
            plan_code: plan_code.to_string(),
            catalog,
            selection,
        })
    }

    /// Replaces the plan's grants with the selection.
    pub async fn save(&self, plan_code: &str, selection: &EndpointSelection) -> Result<(), AppError> {
        let plan_code = require_plan_code(plan_code)?;

        self.repository
            .replace_plan_endpoints(plan_code, selection.ids())
            .await?;
        tracing::info!(plan = plan_code, endpoints = selection.len(), "Saved plan endpoints");

        Ok(())
    }
}

fn require_plan_code(code: &str) -> Result<&str, AppError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::bad_request(
            "Plan code is required",
            json!({ "field": "planCode" }),
        ));
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{HttpMethod, NewEndpoint};
    use crate::domain::repositories::MockEndpointRepository;
    use mockall::Sequence;

    fn catalog() -> Vec<EndpointDescriptor> {
        vec![
            EndpointDescriptor::new(1, HttpMethod::Get, "/api/sales"),
            EndpointDescriptor::new(2, HttpMethod::Post, "/api/sales"),
            EndpointDescriptor::new(3, HttpMethod::Get, "/api/customers"),
        ]
    }

    fn plan(code: &str) -> SubscriptionPlan {
        SubscriptionPlan {
            id: Some(9),
            code: code.to_string(),
            name: code.to_string(),
            description: None,
            price_monthly: 499.0,
            price_yearly: 4999.0,
            trial_days: 0,
            active: true,
        }
    }

    #[tokio::test]
    async fn test_load_catalog_returns_existing() {
        let mut mock_repo = MockEndpointRepository::new();
        mock_repo
            .expect_list_catalog()
            .times(1)
            .returning(|| Ok(catalog()));
        mock_repo.expect_discover().never();

        let service = EndpointService::new(Arc::new(mock_repo));

        assert_eq!(service.load_catalog().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_auto_imported() {
        let mut mock_repo = MockEndpointRepository::new();
        let mut seq = Sequence::new();

        mock_repo
            .expect_list_catalog()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![]));
        mock_repo
            .expect_discover()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(vec![NewEndpoint {
                    http_method: HttpMethod::Get,
                    path_pattern: "/api/sales".to_string(),
                }])
            });
        mock_repo
            .expect_import_catalog()
            .withf(|endpoints| endpoints.len() == 1)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock_repo
            .expect_list_catalog()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(catalog()));

        let service = EndpointService::new(Arc::new(mock_repo));

        assert_eq!(service.load_catalog().await.unwrap(), catalog());
    }

    #[tokio::test]
    async fn test_failed_auto_import_is_not_an_error() {
        let mut mock_repo = MockEndpointRepository::new();
        mock_repo
            .expect_list_catalog()
            .times(1)
            .returning(|| Ok(vec![]));
        mock_repo
            .expect_discover()
            .times(1)
            .returning(|| Err(AppError::upstream(500, "boom", json!({}))));
        mock_repo.expect_import_catalog().never();

        let service = EndpointService::new(Arc::new(mock_repo));

        assert!(service.load_catalog().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_trial_placeholder_when_missing() {
        let mut mock_repo = MockEndpointRepository::new();
        mock_repo
            .expect_list_plans()
            .times(2)
            .returning(|| Ok(vec![plan("GOLD")]));

        let service = EndpointService::new(Arc::new(mock_repo));

        let trial = service.find_plan("TRIAL").await.unwrap().unwrap();
        assert!(trial.is_trial());
        assert!(trial.id.is_none());

        assert!(service.find_plan("SILVER").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_open_editor_matches_by_route() {
        let mut mock_repo = MockEndpointRepository::new();
        mock_repo
            .expect_list_plans()
            .returning(|| Ok(vec![plan("GOLD")]));
        mock_repo
            .expect_list_catalog()
            .returning(|| Ok(catalog()));
        mock_repo
            .expect_list_plan_endpoints()
            .withf(|code| code == "GOLD")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    EndpointDescriptor::new(501, HttpMethod::Post, "/api/sales"),
                    EndpointDescriptor::new(502, HttpMethod::Delete, "/api/sales"),
                ])
            });

        let service = EndpointService::new(Arc::new(mock_repo));
        let editor = service.open_editor(" GOLD ").await.unwrap();

        assert_eq!(editor.plan_code, "GOLD");
        assert_eq!(editor.plan.as_ref().map(|p| p.code.as_str()), Some("GOLD"));
        assert_eq!(editor.selection.ids(), vec![2]);
        assert_eq!(editor.groups().len(), 2);
        assert_eq!(editor.search("customers").len(), 1);
    }

    #[tokio::test]
    async fn test_save_sends_sorted_ids() {
        let mut mock_repo = MockEndpointRepository::new();
        mock_repo
            .expect_replace_plan_endpoints()
            .withf(|code, ids| code == "GOLD" && ids == &vec![1, 3])
            .times(1)
            .returning(|_, _| Ok(()));

        let service = EndpointService::new(Arc::new(mock_repo));
        let mut selection = EndpointSelection::new();
        selection.toggle(3);
        selection.toggle(1);

        service.save("GOLD", &selection).await.unwrap();
    }

    #[tokio::test]
    async fn test_blank_plan_code_is_rejected() {
        let mock_repo = MockEndpointRepository::new();
        let service = EndpointService::new(Arc::new(mock_repo));

        let result = service.save("  ", &EndpointSelection::new()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }
}
