use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::inspeccion_controller::InspeccionController;
use crate::dto::inspeccion_dto::{CreateInspeccionRequest, InspeccionCreada, InspeccionResumen};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::models::inspeccion::InspeccionItem;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_inspeccion_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_inspecciones))
        .route("/", post(create_inspeccion))
        .route("/:id/items", get(items_inspeccion))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_inspeccion(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateInspeccionRequest>,
) -> Result<(StatusCode, Json<InspeccionCreada>), AppError> {
    let controller = InspeccionController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_inspecciones(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<InspeccionResumen>>, AppError> {
    let controller = InspeccionController::new(state.pool.clone());
    let response = controller.list(&user).await?;
    Ok(Json(response))
}

async fn items_inspeccion(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<InspeccionItem>>, AppError> {
    let controller = InspeccionController::new(state.pool.clone());
    let response = controller.items(&user, id).await?;
    Ok(Json(response))
}
