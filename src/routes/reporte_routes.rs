//! Rutas de reportes
//!
//! El endpoint de PDF responde el binario con `Content-Disposition: inline`
//! para que el navegador lo muestre. Los errores se devuelven como texto
//! plano, nunca como cuerpo JSON que el visor de PDF no sabría mostrar.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::controllers::reporte_controller::ReporteController;
use crate::middleware::auth::auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reporte_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/inspeccion/:id/pdf", get(inspeccion_pdf))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn inspeccion_pdf(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let controller = ReporteController::new(state.pool.clone(), state.config.clone());

    match controller.inspeccion_pdf(id).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=inspeccion_{}.pdf", id),
                ),
            ],
            bytes,
        )
            .into_response(),

        Err(AppError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg).into_response(),

        Err(e) => {
            tracing::error!("Error generando PDF de inspección {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error generando el PDF".to_string(),
            )
                .into_response()
        }
    }
}
