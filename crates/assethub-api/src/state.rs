//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use assethub_core::config::AppConfig;
use assethub_service::machine::MachineService;
use assethub_service::report::ReportService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Machine record service.
    pub machine_service: Arc<MachineService>,
    /// Report/export/statistics service.
    pub report_service: Arc<ReportService>,
}
