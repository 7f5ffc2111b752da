use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::mantencion_controller::MantencionController;
use crate::dto::mantencion_dto::{CreateMantencionRequest, MantencionDetalle, MantencionResumen};
use crate::middleware::auth::auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_mantencion_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_mantenciones))
        .route("/", post(create_mantencion))
        .route("/:id", get(detalle_mantencion))
        .route("/:id", put(update_mantencion))
        .route("/:id", delete(delete_mantencion))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_mantenciones(
    State(state): State<AppState>,
) -> Result<Json<Vec<MantencionResumen>>, AppError> {
    let controller = MantencionController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn detalle_mantencion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MantencionDetalle>, AppError> {
    let controller = MantencionController::new(state.pool.clone());
    let response = controller.detalle(id).await?;
    Ok(Json(response))
}

async fn create_mantencion(
    State(state): State<AppState>,
    Json(request): Json<CreateMantencionRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let controller = MantencionController::new(state.pool.clone());
    let id = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

async fn update_mantencion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateMantencionRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = MantencionController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(Json(json!({ "message": "Mantención actualizada" })))
}

async fn delete_mantencion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let controller = MantencionController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({ "message": "Mantención eliminada" })))
}
