//! Pagination for the inactive-user table.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;
pub const MIN_ROWS_PER_PAGE: u32 = 5;
pub const MAX_ROWS_PER_PAGE: u32 = 100;

/// Table paging state.
///
/// Pages are 0-based, as in the table widget. Values may arrive as query
/// strings and are parsed with `serde_with`.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub rows_per_page: Option<u32>,
}

impl PageParams {
    pub fn new(page: u32, rows_per_page: u32) -> Self {
        Self {
            page: Some(page),
            rows_per_page: Some(rows_per_page),
        }
    }

    /// Validates the parameters and converts them to `(offset, limit)`.
    ///
    /// # Defaults
    ///
    /// - `page`: 0
    /// - `rows_per_page`: 10
    ///
    /// # Validation
    ///
    /// Rows per page must be between 5 and 100.
    pub fn validate_and_get_offset_limit(&self) -> Result<(usize, usize), String> {
        let page = self.page.unwrap_or(0);
        let rows = self.rows_per_page.unwrap_or(DEFAULT_ROWS_PER_PAGE);

        if !(MIN_ROWS_PER_PAGE..=MAX_ROWS_PER_PAGE).contains(&rows) {
            return Err(format!(
                "Rows per page must be between {MIN_ROWS_PER_PAGE} and {MAX_ROWS_PER_PAGE}"
            ));
        }

        let offset = page as usize * rows as usize;
        Ok((offset, rows as usize))
    }
}

/// One page of rows plus the totals the table footer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub rows_per_page: u32,
    pub total: usize,
}

impl<T> Page<T> {
    /// Number of pages needed to show `total` rows.
    pub fn page_count(&self) -> usize {
        if self.rows_per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.rows_per_page as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, rows: Option<u32>) -> PageParams {
        PageParams {
            page,
            rows_per_page: rows,
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(params(None, None).validate_and_get_offset_limit(), Ok((0, 10)));
    }

    #[test]
    fn test_second_page() {
        assert_eq!(
            params(Some(2), Some(25)).validate_and_get_offset_limit(),
            Ok((50, 25))
        );
    }

    #[test]
    fn test_rows_bounds() {
        assert!(params(None, Some(4)).validate_and_get_offset_limit().is_err());
        assert!(params(None, Some(5)).validate_and_get_offset_limit().is_ok());
        assert!(params(None, Some(100)).validate_and_get_offset_limit().is_ok());
        assert!(params(None, Some(101)).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_parses_query_strings() {
        let p: PageParams = serde_json::from_str(r#"{"page": "3", "rowsPerPage": "25"}"#).unwrap();
        assert_eq!(p.page, Some(3));
        assert_eq!(p.rows_per_page, Some(25));
    }

    #[test]
    fn test_page_count() {
        let page: Page<u8> = Page {
            items: vec![],
            page: 0,
            rows_per_page: 10,
            total: 21,
        };
        assert_eq!(page.page_count(), 3);
    }
}
