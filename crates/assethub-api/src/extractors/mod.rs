//! Query-parameter extractors.

pub mod report;

pub use report::{ExportParams, ReportParams};
