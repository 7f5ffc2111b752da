use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::vehiculo_controller::VehiculoController;
use crate::dto::vehiculo_dto::{CreateVehiculoRequest, UpdateVehiculoRequest, VehiculoResponse};
use crate::middleware::auth::auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehiculo_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehiculos))
        .route("/", post(create_vehiculo))
        .route("/:id", put(update_vehiculo))
        .route("/:id", delete(delete_vehiculo))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_vehiculos(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_vehiculo(
    State(state): State<AppState>,
    Json(request): Json<CreateVehiculoRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let id = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

async fn update_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateVehiculoRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(Json(json!({ "message": "Vehículo actualizado" })))
}

async fn delete_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({ "message": "Vehículo eliminado" })))
}
