use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de autenticación. `/login` es pública; `/me` exige token.
pub fn create_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route(
            "/me",
            get(me).route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn me(Extension(user): Extension<AuthenticatedUser>) -> Json<Value> {
    Json(json!({
        "id": user.id,
        "username": user.username,
        "nombre": user.nombre,
        "rol": user.rol.as_str(),
    }))
}
