//! Controlador de reportes
//!
//! Carga la inspección persistida y delega el armado del documento al
//! renderer. Si la inspección no existe, el endpoint responde texto plano,
//! nunca un PDF malformado.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::inspeccion_repository::InspeccionRepository;
use crate::reports::inspeccion_pdf::render_inspeccion_pdf;
use crate::utils::errors::AppError;

pub struct ReporteController {
    repository: InspeccionRepository,
    config: EnvironmentConfig,
}

impl ReporteController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: InspeccionRepository::new(pool),
            config,
        }
    }

    /// Generar el informe PDF de una inspección
    pub async fn inspeccion_pdf(&self, inspeccion_id: i32) -> Result<Vec<u8>, AppError> {
        let data = self
            .repository
            .find_for_report(inspeccion_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inspección no encontrada".to_string()))?;

        let items = self.repository.items_for(inspeccion_id).await?;

        render_inspeccion_pdf(&data, &items, self.config.logo_path.as_deref())
    }
}
