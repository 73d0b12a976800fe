//! Report and CSV export handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use assethub_core::error::AppError;

use crate::dto::response::{ApiResponse, ReportResponse};
use crate::extractors::report::{ExportParams, ReportParams};
use crate::state::AppState;

/// GET /api/machines/report?page&search&sort&order
pub async fn report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ApiResponse<ReportResponse>>, AppError> {
    let page = state.report_service.report(&params.to_query()).await?;
    Ok(Json(ApiResponse::ok(ReportResponse::new(page, &params))))
}

/// GET /api/machines/export?search
///
/// Streams the filtered inventory as a CSV attachment.
pub async fn export_csv(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Result<Response, AppError> {
    let export = state.report_service.export_csv(&params.search).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        )
        .body(Body::from(export.content))
        .map_err(|e| AppError::internal(format!("Failed to build export response: {e}")))
}
