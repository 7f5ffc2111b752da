//! Controlador de mantenciones

use sqlx::PgPool;

use crate::dto::mantencion_dto::{CreateMantencionRequest, MantencionDetalle, MantencionResumen};
use crate::repositories::mantencion_repository::MantencionRepository;
use crate::utils::errors::AppError;

pub struct MantencionController {
    repository: MantencionRepository,
}

impl MantencionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MantencionRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<MantencionResumen>, AppError> {
        self.repository.list().await
    }

    pub async fn detalle(&self, id: i32) -> Result<MantencionDetalle, AppError> {
        let mantencion = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mantención no encontrada".to_string()))?;

        let items = self.repository.items_for(id).await?;

        Ok(MantencionDetalle { mantencion, items })
    }

    pub async fn create(&self, request: CreateMantencionRequest) -> Result<i32, AppError> {
        let vehiculo_id = request
            .vehiculo_id
            .ok_or_else(|| AppError::BadRequest("vehiculo_id es obligatorio".to_string()))?;
        let tipo = request
            .tipo
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("tipo es obligatorio".to_string()))?;

        self.repository
            .create_with_items(
                vehiculo_id,
                request.usuario_id,
                tipo,
                request.observacion.as_deref().unwrap_or(""),
                request.costo.unwrap_or(0),
                &request.items,
            )
            .await
    }

    pub async fn update(&self, id: i32, request: CreateMantencionRequest) -> Result<(), AppError> {
        let vehiculo_id = request
            .vehiculo_id
            .ok_or_else(|| AppError::BadRequest("vehiculo_id es obligatorio".to_string()))?;
        let tipo = request
            .tipo
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("tipo es obligatorio".to_string()))?;

        let updated = self
            .repository
            .update_with_items(
                id,
                vehiculo_id,
                request.usuario_id,
                tipo,
                request.observacion.as_deref().unwrap_or(""),
                request.costo.unwrap_or(0),
                &request.items,
            )
            .await?;

        if updated == 0 {
            return Err(AppError::NotFound("Mantención no encontrada".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Mantención no encontrada".to_string()));
        }

        Ok(())
    }
}
