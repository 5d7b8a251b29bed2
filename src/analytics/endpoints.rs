//! Endpoint categorization and grouping for the plan-endpoint manager.

use std::collections::BTreeMap;

use crate::domain::entities::{CategoryGroup, EndpointCategory, EndpointDescriptor};

/// A categorization rule: path prefixes and substrings that select a category.
struct Rule {
    category: EndpointCategory,
    prefixes: &'static [&'static str],
    fragments: &'static [&'static str],
}

/// Rules in priority order; the first match wins.
const RULES: &[Rule] = &[
    Rule {
        category: EndpointCategory::Inventory,
        prefixes: &["/inventory", "/api/inventory", "/api/stock", "/api/mobile"],
        fragments: &["/inventory"],
    },
    Rule {
        category: EndpointCategory::Customers,
        prefixes: &["/api/customers", "/api/customer"],
        fragments: &[],
    },
    Rule {
        category: EndpointCategory::Sales,
        prefixes: &["/api/sales", "/api/sale"],
        fragments: &[],
    },
    Rule {
        category: EndpointCategory::PurchaseBill,
        prefixes: &["/api/bill", "/api/purchase"],
        fragments: &[],
    },
    Rule {
        category: EndpointCategory::AccountLedger,
        prefixes: &["/api/ledger", "/api/account"],
        fragments: &["/ledger", "/account"],
    },
    Rule {
        category: EndpointCategory::Dues,
        prefixes: &["/api/dues"],
        fragments: &["/due"],
    },
    Rule {
        category: EndpointCategory::Subscriptions,
        prefixes: &["/api/subscriptions"],
        fragments: &[],
    },
    Rule {
        category: EndpointCategory::UsersAdmin,
        prefixes: &["/api/users", "/api/user"],
        fragments: &[],
    },
    Rule {
        category: EndpointCategory::Auth,
        prefixes: &["/api/auth"],
        fragments: &["login", "token"],
    },
    Rule {
        category: EndpointCategory::Hsn,
        prefixes: &["/api/hsn"],
        fragments: &[],
    },
    Rule {
        category: EndpointCategory::Settings,
        prefixes: &["/api/settings"],
        fragments: &["shop-settings"],
    },
    Rule {
        category: EndpointCategory::Festival,
        prefixes: &["/api/festival"],
        fragments: &[],
    },
];

impl Rule {
    fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|p| path.starts_with(p))
            || self.fragments.iter().any(|f| path.contains(f))
    }
}

/// Files a route path under exactly one category.
///
/// Matching is case-insensitive and first-match-wins over a fixed rule
/// order; paths no rule accepts (including the empty path) are `Other`.
///
/// # Examples
///
/// ```
/// use shop_admin_analytics::analytics::categorize;
/// use shop_admin_analytics::domain::entities::EndpointCategory;
///
/// assert_eq!(categorize("/api/sales/today"), EndpointCategory::Sales);
/// assert_eq!(categorize("/api/ledger/export"), EndpointCategory::AccountLedger);
/// assert_eq!(categorize("/foo/bar"), EndpointCategory::Other);
/// ```
pub fn categorize(path: &str) -> EndpointCategory {
    if path.is_empty() {
        return EndpointCategory::Other;
    }

    let path = path.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&path))
        .map(|rule| rule.category)
        .unwrap_or(EndpointCategory::Other)
}

/// Groups endpoints by category in display order.
///
/// Categories come in [`EndpointCategory`] order: the priority categories
/// first, then the rest alphabetically. Within a group, endpoints are
/// ordered by method rank and then by path.
pub fn group_endpoints(endpoints: &[EndpointDescriptor]) -> Vec<CategoryGroup> {
    let mut groups: BTreeMap<EndpointCategory, Vec<EndpointDescriptor>> = BTreeMap::new();

    for endpoint in endpoints {
        groups
            .entry(categorize(&endpoint.path_pattern))
            .or_default()
            .push(endpoint.clone());
    }

    groups
        .into_iter()
        .map(|(category, mut endpoints)| {
            endpoints.sort_by(|a, b| {
                a.http_method
                    .cmp(&b.http_method)
                    .then_with(|| a.path_pattern.cmp(&b.path_pattern))
            });
            CategoryGroup {
                category,
                endpoints,
            }
        })
        .collect()
}

/// Narrows groups to endpoints whose path or method contains `query`.
///
/// The match is case-insensitive and ignores surrounding whitespace. Groups
/// left empty are dropped; an empty query returns the groups unchanged.
pub fn filter_groups(groups: &[CategoryGroup], query: &str) -> Vec<CategoryGroup> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return groups.to_vec();
    }

    groups
        .iter()
        .filter_map(|group| {
            let endpoints: Vec<EndpointDescriptor> = group
                .endpoints
                .iter()
                .filter(|ep| {
                    ep.path_pattern.to_lowercase().contains(&query)
                        || ep.http_method.as_str().to_lowercase().contains(&query)
                })
                .cloned()
                .collect();

            (!endpoints.is_empty()).then(|| CategoryGroup {
                category: group.category,
                endpoints,
            })
        })
        .collect()
}
