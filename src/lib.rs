//! API de gestión de flota municipal: inspecciones vehiculares con
//! checklist, mantenciones, usuarios y generación de informes PDF.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod reports;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Construir el router completo de la aplicación
pub fn build_app(app_state: AppState) -> Router {
    let cors = if app_state.config.cors_origins.iter().any(|o| o == "*") {
        cors_middleware()
    } else {
        cors_middleware_with_origins(app_state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health_endpoint))
        .nest(
            "/api/auth",
            routes::auth_routes::create_auth_router(app_state.clone()),
        )
        .nest(
            "/api/usuarios",
            routes::usuario_routes::create_usuario_router(app_state.clone()),
        )
        .nest(
            "/api/vehiculos",
            routes::vehiculo_routes::create_vehiculo_router(app_state.clone()),
        )
        .nest(
            "/api/inspecciones",
            routes::inspeccion_routes::create_inspeccion_router(app_state.clone()),
        )
        .nest(
            "/api/mantenciones",
            routes::mantencion_routes::create_mantencion_router(app_state.clone()),
        )
        .nest(
            "/api/reportes",
            routes::reporte_routes::create_reporte_router(app_state.clone()),
        )
        .layer(cors)
        .with_state(app_state)
}

/// Endpoint de estado del servicio
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "flota_municipal",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
