//! Endpoint catalog entities used when assigning API access to plans.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// HTTP method of a catalog endpoint.
///
/// Methods outside the five the dashboard knows are kept verbatim
/// (upper-cased) so they can still be ranked and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Other(String),
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Other(method) => method,
        }
    }

    /// Display rank: GET, POST, PUT, DELETE, PATCH, then everything else.
    pub fn rank(&self) -> u8 {
        match self {
            HttpMethod::Get => 1,
            HttpMethod::Post => 2,
            HttpMethod::Put => 3,
            HttpMethod::Delete => 4,
            HttpMethod::Patch => 5,
            HttpMethod::Other(_) => 99,
        }
    }
}

impl FromStr for HttpMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Ok(match upper.as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            _ => HttpMethod::Other(upper),
        })
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ord for HttpMethod {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.as_str().cmp(other.as_str()))
    }
}

impl PartialOrd for HttpMethod {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A backend route known to the subscription access catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub id: i64,
    pub http_method: HttpMethod,
    pub path_pattern: String,
}

impl EndpointDescriptor {
    pub fn new(id: i64, http_method: HttpMethod, path_pattern: impl Into<String>) -> Self {
        Self {
            id,
            http_method,
            path_pattern: path_pattern.into(),
        }
    }

    /// Returns true if both descriptors name the same (method, path) route.
    ///
    /// Plan endpoints and catalog endpoints carry different ids, so the
    /// route is the only reliable join key between them.
    pub fn same_route(&self, other: &EndpointDescriptor) -> bool {
        self.http_method == other.http_method && self.path_pattern == other.path_pattern
    }
}

/// A route reported by endpoint discovery, not yet in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEndpoint {
    pub http_method: HttpMethod,
    pub path_pattern: String,
}

/// Category an endpoint is filed under in the plan-endpoint manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointCategory {
    Inventory,
    Customers,
    Sales,
    PurchaseBill,
    AccountLedger,
    Dues,
    Subscriptions,
    UsersAdmin,
    Auth,
    Hsn,
    Settings,
    Festival,
    Other,
}

impl EndpointCategory {
    /// Categories listed ahead of the alphabetical remainder, in order.
    pub const PRIORITY: [EndpointCategory; 5] = [
        EndpointCategory::Inventory,
        EndpointCategory::Customers,
        EndpointCategory::Sales,
        EndpointCategory::PurchaseBill,
        EndpointCategory::AccountLedger,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EndpointCategory::Inventory => "Inventory",
            EndpointCategory::Customers => "Customers",
            EndpointCategory::Sales => "Sales",
            EndpointCategory::PurchaseBill => "Purchase/Bill",
            EndpointCategory::AccountLedger => "Account/Ledger",
            EndpointCategory::Dues => "Dues",
            EndpointCategory::Subscriptions => "Subscriptions",
            EndpointCategory::UsersAdmin => "Users/Admin",
            EndpointCategory::Auth => "Auth",
            EndpointCategory::Hsn => "HSN",
            EndpointCategory::Settings => "Settings",
            EndpointCategory::Festival => "Festival",
            EndpointCategory::Other => "Other",
        }
    }

    fn priority(&self) -> Option<usize> {
        Self::PRIORITY.iter().position(|c| c == self)
    }
}

impl fmt::Display for EndpointCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priority categories first, in [`EndpointCategory::PRIORITY`] order,
/// then the rest alphabetically by label.
impl Ord for EndpointCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.priority(), other.priority()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.label().cmp(other.label()),
        }
    }
}

impl PartialOrd for EndpointCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Endpoints of one category, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: EndpointCategory,
    pub endpoints: Vec<EndpointDescriptor>,
}
