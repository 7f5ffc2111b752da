use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::usuario_controller::UsuarioController;
use crate::dto::usuario_dto::{
    CreateUsuarioRequest, UpdatePasswordRequest, UpdateUsuarioRequest, UsuarioResponse,
};
use crate::middleware::auth::auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_usuario_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_usuarios))
        .route("/", post(create_usuario))
        .route("/conductores", get(list_conductores))
        .route("/:id", put(update_usuario))
        .route("/:id", delete(delete_usuario))
        .route("/:id/password", put(update_password))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_usuarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<UsuarioResponse>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn list_conductores(
    State(state): State<AppState>,
) -> Result<Json<Vec<UsuarioResponse>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.conductores().await?;
    Ok(Json(response))
}

async fn create_usuario(
    State(state): State<AppState>,
    Json(request): Json<CreateUsuarioRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let id = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

async fn update_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateUsuarioRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(Json(json!({ "message": "Usuario actualizado" })))
}

async fn update_password(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    controller.update_password(id, request).await?;
    Ok(Json(json!({ "message": "Contraseña actualizada" })))
}

async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({ "message": "Usuario eliminado" })))
}
