//! Which catalog endpoints a plan grants, as edited in the plan-endpoint manager.

use std::collections::BTreeSet;

use crate::domain::entities::{CategoryGroup, EndpointDescriptor};

/// Set of selected catalog endpoint ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointSelection {
    selected: BTreeSet<i64>,
}

impl EndpointSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects every catalog endpoint whose route appears among `assigned`.
    ///
    /// Plan endpoints are stored with their own ids, so matching is done on
    /// the (method, path) pair.
    pub fn from_assigned(catalog: &[EndpointDescriptor], assigned: &[EndpointDescriptor]) -> Self {
        let selected = catalog
            .iter()
            .filter(|ep| assigned.iter().any(|a| a.same_route(ep)))
            .map(|ep| ep.id)
            .collect();

        Self { selected }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    /// Flips a single endpoint.
    pub fn toggle(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// True if the group is non-empty and every endpoint in it is selected.
    pub fn is_fully_selected(&self, group: &CategoryGroup) -> bool {
        !group.endpoints.is_empty() && group.endpoints.iter().all(|ep| self.contains(ep.id))
    }

    /// True if some, but not all, endpoints in the group are selected.
    pub fn is_partially_selected(&self, group: &CategoryGroup) -> bool {
        let selected = group
            .endpoints
            .iter()
            .filter(|ep| self.contains(ep.id))
            .count();
        selected > 0 && selected < group.endpoints.len()
    }

    /// Deselects the group when fully selected, otherwise selects all of it.
    pub fn toggle_category(&mut self, group: &CategoryGroup) {
        if self.is_fully_selected(group) {
            for ep in &group.endpoints {
                self.selected.remove(&ep.id);
            }
        } else {
            self.selected.extend(group.endpoints.iter().map(|ep| ep.id));
        }
    }

    pub fn select_all(&mut self, catalog: &[EndpointDescriptor]) {
        self.selected = catalog.iter().map(|ep| ep.id).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::group_endpoints;
    use crate::domain::entities::HttpMethod;

    fn ep(id: i64, method: HttpMethod, path: &str) -> EndpointDescriptor {
        EndpointDescriptor::new(id, method, path)
    }

    fn catalog() -> Vec<EndpointDescriptor> {
        vec![
            ep(1, HttpMethod::Get, "/api/sales"),
            ep(2, HttpMethod::Post, "/api/sales"),
            ep(3, HttpMethod::Get, "/api/customers"),
        ]
    }

    #[test]
    fn test_from_assigned_matches_on_route() {
        let assigned = vec![
            ep(100, HttpMethod::Post, "/api/sales"),
            ep(101, HttpMethod::Delete, "/api/customers"),
        ];

        let selection = EndpointSelection::from_assigned(&catalog(), &assigned);

        assert_eq!(selection.ids(), vec![2]);
    }

    #[test]
    fn test_toggle_single_endpoint() {
        let mut selection = EndpointSelection::new();

        selection.toggle(3);
        assert!(selection.contains(3));

        selection.toggle(3);
        assert!(!selection.contains(3));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_category_toggle_and_state() {
        let groups = group_endpoints(&catalog());
        let sales = groups
            .iter()
            .find(|g| g.category.label() == "Sales")
            .unwrap();
        let mut selection = EndpointSelection::new();

        assert!(!selection.is_fully_selected(sales));
        assert!(!selection.is_partially_selected(sales));

        selection.toggle(1);
        assert!(selection.is_partially_selected(sales));

        selection.toggle_category(sales);
        assert!(selection.is_fully_selected(sales));
        assert_eq!(selection.ids(), vec![1, 2]);

        selection.toggle_category(sales);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_empty_group_is_never_fully_selected() {
        let group = CategoryGroup {
            category: crate::domain::entities::EndpointCategory::Other,
            endpoints: vec![],
        };
        let selection = EndpointSelection::new();

        assert!(!selection.is_fully_selected(&group));
        assert!(!selection.is_partially_selected(&group));
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut selection = EndpointSelection::new();

        selection.select_all(&catalog());
        assert_eq!(selection.len(), 3);

        selection.clear();
        assert!(selection.is_empty());
    }
}
