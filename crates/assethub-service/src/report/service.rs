//! Report service — the read side of the inventory.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use assethub_core::result::AppResult;
use assethub_core::types::pagination::{PageRequest, PageResponse, REPORT_PAGE_SIZE};
use assethub_core::types::sorting::SortDirection;
use assethub_database::repositories::machine::MachineRepository;
use assethub_entity::machine::{Machine, MachineSortKey};

use super::export::{self, CsvExport};
use super::statistics::{self, Statistics};

/// A parsed report request.
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    /// Free-text filter term; empty means no filtering.
    pub search: String,
    /// Sort column.
    pub sort: MachineSortKey,
    /// Sort direction.
    pub direction: SortDirection,
    /// Page number (1-based).
    pub page: u64,
}

/// Serves the report view, CSV export, and statistics dashboard.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// Machine repository.
    repo: Arc<MachineRepository>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(repo: Arc<MachineRepository>) -> Self {
        Self { repo }
    }

    /// Filtered, sorted page of the inventory.
    pub async fn report(&self, query: &ReportQuery) -> AppResult<PageResponse<Machine>> {
        let page = PageRequest::new(query.page, REPORT_PAGE_SIZE);
        self.repo
            .search(&query.search, query.sort, query.direction, &page)
            .await
    }

    /// Render every machine matching the filter into a downloadable CSV.
    pub async fn export_csv(&self, search: &str) -> AppResult<CsvExport> {
        let machines = self.repo.search_all(search).await?;
        let export = CsvExport {
            filename: export::export_filename(Utc::now()),
            content: export::render_csv(&machines),
        };

        info!(filename = %export.filename, rows = machines.len(), "CSV export generated");
        Ok(export)
    }

    /// Aggregate the statistics dashboard.
    pub async fn statistics(&self) -> AppResult<Statistics> {
        let total_machines = self.repo.count().await?;
        let total_departments = self.repo.count_departments().await?;
        let avg_ram = self.repo.average_ram().await?;
        let avg_storage = self.repo.average_storage().await?;
        let department_counts = self.repo.department_counts().await?;
        let ram_counts = self.repo.ram_counts().await?;
        let storage_counts = self.repo.storage_counts().await?;

        Ok(statistics::assemble(
            total_machines,
            total_departments,
            avg_ram,
            avg_storage,
            department_counts,
            ram_counts,
            storage_counts,
        ))
    }
}
