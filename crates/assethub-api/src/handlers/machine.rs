//! Machine CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use assethub_core::error::AppError;
use assethub_service::machine::MachineDraft;

use crate::dto::response::{ApiResponse, MachineResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/machines
///
/// The full inventory as a plain JSON array, in registration order.
pub async fn list_machines(
    State(state): State<AppState>,
) -> Result<Json<Vec<MachineResponse>>, AppError> {
    let machines = state.machine_service.list_all().await?;
    Ok(Json(
        machines.into_iter().map(MachineResponse::from).collect(),
    ))
}

/// POST /api/machines
pub async fn create_machine(
    State(state): State<AppState>,
    Json(draft): Json<MachineDraft>,
) -> Result<(StatusCode, Json<ApiResponse<MachineResponse>>), AppError> {
    let machine = state.machine_service.create(&draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(MachineResponse::from(machine))),
    ))
}

/// GET /api/machines/{id}
pub async fn get_machine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MachineResponse>>, AppError> {
    let machine = state.machine_service.get(id).await?;
    Ok(Json(ApiResponse::ok(MachineResponse::from(machine))))
}

/// PUT /api/machines/{id}
pub async fn update_machine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<MachineDraft>,
) -> Result<Json<ApiResponse<MachineResponse>>, AppError> {
    let machine = state.machine_service.update(id, &draft).await?;
    Ok(Json(ApiResponse::ok(MachineResponse::from(machine))))
}

/// DELETE /api/machines/{id}
pub async fn delete_machine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    let name = state.machine_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Machine \"{name}\" removed successfully"),
    })))
}
