//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use assethub_core::types::datetime::format_timestamp;
use assethub_core::types::pagination::PageResponse;
use assethub_entity::machine::Machine;

use crate::extractors::report::ReportParams;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A machine as rendered on the wire, timestamps in `DD/MM/YYYY HH:MM`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineResponse {
    /// Machine ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Department label.
    pub department: String,
    /// IP address.
    pub ip_address: String,
    /// MAC address.
    pub mac_address: String,
    /// Hostname.
    pub hostname: String,
    /// Installed RAM in gigabytes.
    pub ram_gb: i32,
    /// Storage capacity in gigabytes.
    pub storage_gb: i32,
    /// Internal phone extension.
    pub extension: i32,
    /// Registration timestamp.
    pub created_at: String,
    /// Last-update timestamp.
    pub updated_at: String,
}

impl From<Machine> for MachineResponse {
    fn from(machine: Machine) -> Self {
        Self {
            id: machine.id,
            name: machine.name,
            department: machine.department.as_str().to_string(),
            ip_address: machine.ip_address,
            mac_address: machine.mac_address,
            hostname: machine.hostname,
            ram_gb: machine.ram_gb,
            storage_gb: machine.storage_gb,
            extension: machine.extension,
            created_at: format_timestamp(machine.created_at),
            updated_at: format_timestamp(machine.updated_at),
        }
    }
}

/// The report page: one page of machines plus navigation totals and the
/// echoed query state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Machines on this page.
    pub items: Vec<MachineResponse>,
    /// Current page (1-based).
    pub page: u64,
    /// Items per page.
    pub page_size: u64,
    /// Total matching machines.
    pub total_items: u64,
    /// Total pages.
    pub total_pages: u64,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Whether a previous page exists.
    pub has_previous: bool,
    /// Echoed search term.
    pub search: String,
    /// Echoed sort key.
    pub sort: String,
    /// Echoed sort direction.
    pub order: String,
}

impl ReportResponse {
    /// Combine a result page with the request that produced it.
    pub fn new(page: PageResponse<Machine>, params: &ReportParams) -> Self {
        let query = params.to_query();
        Self {
            items: page.items.into_iter().map(MachineResponse::from).collect(),
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            has_next: page.has_next,
            has_previous: page.has_previous,
            search: query.search,
            sort: query.sort.as_str().to_string(),
            order: query.direction.as_str().to_string(),
        }
    }
}

/// Deletion confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation message.
    pub message: String,
}

/// Liveness payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assethub_entity::machine::Department;
    use chrono::TimeZone;
    use chrono::Utc;

    #[test]
    fn test_machine_response_formats_timestamps_day_first() {
        let ts = Utc.with_ymd_and_hms(2025, 12, 1, 8, 5, 0).unwrap();
        let machine = Machine {
            id: Uuid::new_v4(),
            name: "PC-01".to_string(),
            department: Department::Ti,
            ip_address: "10.0.0.5".to_string(),
            mac_address: "AA:BB:CC:DD:EE:01".to_string(),
            hostname: "pc01".to_string(),
            ram_gb: 16,
            storage_gb: 512,
            extension: 1001,
            created_at: ts,
            updated_at: ts,
        };

        let response = MachineResponse::from(machine);
        assert_eq!(response.department, "TI");
        assert_eq!(response.created_at, "01/12/2025 08:05");
        assert_eq!(response.updated_at, "01/12/2025 08:05");
    }
}
