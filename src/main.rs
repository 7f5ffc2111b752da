use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use flota_municipal::build_app;
use flota_municipal::config::environment::EnvironmentConfig;
use flota_municipal::database::DatabaseConnection;
use flota_municipal::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚛 Flota Municipal - API de inspecciones y mantenciones");
    info!("=======================================================");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(anyhow::anyhow!("Error de configuración: {}", e));
        }
    };

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let app_state = AppState::new(pool, config.clone());
    let app = build_app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    info!("🔐 Autenticación:");
    info!("   POST /api/auth/login - Iniciar sesión");
    info!("   GET  /api/auth/me - Sesión actual");
    info!("👥 Usuarios:");
    info!("   GET  /api/usuarios - Listar usuarios");
    info!("   GET  /api/usuarios/conductores - Listar conductores activos");
    info!("   POST /api/usuarios - Crear usuario");
    info!("   PUT  /api/usuarios/:id - Actualizar usuario");
    info!("   PUT  /api/usuarios/:id/password - Cambiar contraseña");
    info!("   DELETE /api/usuarios/:id - Eliminar usuario");
    info!("🚗 Vehículos:");
    info!("   GET  /api/vehiculos - Listar vehículos");
    info!("   POST /api/vehiculos - Crear vehículo");
    info!("   PUT  /api/vehiculos/:id - Actualizar vehículo");
    info!("   DELETE /api/vehiculos/:id - Eliminar vehículo");
    info!("📋 Inspecciones:");
    info!("   GET  /api/inspecciones - Listar inspecciones de conductores");
    info!("   POST /api/inspecciones - Registrar inspección con checklist");
    info!("   GET  /api/inspecciones/:id/items - Ítems de una inspección");
    info!("🔧 Mantenciones:");
    info!("   GET  /api/mantenciones - Listar mantenciones");
    info!("   GET  /api/mantenciones/:id - Detalle de mantención");
    info!("   POST /api/mantenciones - Registrar mantención");
    info!("   PUT  /api/mantenciones/:id - Actualizar mantención");
    info!("   DELETE /api/mantenciones/:id - Eliminar mantención");
    info!("📄 Reportes:");
    info!("   GET  /api/reportes/inspeccion/:id/pdf - Informe PDF de inspección");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
