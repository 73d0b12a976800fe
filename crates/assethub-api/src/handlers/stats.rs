//! Statistics dashboard handler.

use axum::Json;
use axum::extract::State;

use assethub_core::error::AppError;
use assethub_service::report::Statistics;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/machines/stats
pub async fn statistics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Statistics>>, AppError> {
    let stats = state.report_service.statistics().await?;
    Ok(Json(ApiResponse::ok(stats)))
}
