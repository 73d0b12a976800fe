//! # assethub-service
//!
//! Business logic service layer for AssetHub. Services orchestrate the
//! machine repository to implement application-level use cases: validated
//! record mutations, the report view, CSV export, and the statistics
//! dashboard.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod machine;
pub mod report;

pub use machine::{MachineDraft, MachineService, MachineValidator};
pub use report::{ReportQuery, ReportService};
