//! Report and export query parameters.

use serde::{Deserialize, Serialize};

use assethub_core::types::sorting::SortDirection;
use assethub_entity::machine::MachineSortKey;
use assethub_service::report::ReportQuery;

/// Query parameters for the report endpoint.
///
/// Every parameter is optional; unknown sort keys and directions fall
/// back to name ascending rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Free-text filter term.
    #[serde(default)]
    pub search: String,
    /// Sort key: `name`, `department`, or `date`.
    #[serde(default)]
    pub sort: String,
    /// Sort direction: `asc` or `desc`.
    #[serde(default)]
    pub order: String,
}

impl ReportParams {
    /// Converts to a `ReportQuery`.
    pub fn to_query(&self) -> ReportQuery {
        ReportQuery {
            search: self.search.clone(),
            sort: MachineSortKey::parse_or_default(&self.sort),
            direction: SortDirection::parse_or_default(&self.order),
            page: self.page.max(1),
        }
    }
}

/// Query parameters for the CSV export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportParams {
    /// Free-text filter term, same semantics as the report.
    #[serde(default)]
    pub search: String,
}

fn default_page() -> u64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_first_page_name_ascending() {
        let params = ReportParams {
            page: 1,
            search: String::new(),
            sort: String::new(),
            order: String::new(),
        };
        let query = params.to_query();
        assert_eq!(query.page, 1);
        assert_eq!(query.sort, MachineSortKey::Name);
        assert_eq!(query.direction, SortDirection::Asc);
    }

    #[test]
    fn test_unrecognized_sort_falls_back() {
        let params = ReportParams {
            page: 4,
            search: "TI".to_string(),
            sort: "ram".to_string(),
            order: "upside-down".to_string(),
        };
        let query = params.to_query();
        assert_eq!(query.sort, MachineSortKey::Name);
        assert_eq!(query.direction, SortDirection::Asc);
        assert_eq!(query.page, 4);
        assert_eq!(query.search, "TI");
    }
}
