//! Controlador de vehículos
//!
//! La eliminación aplica la verificación de integridad referencial en la
//! capa de aplicación: un vehículo referenciado por inspecciones no se
//! puede borrar.

use sqlx::PgPool;

use crate::dto::vehiculo_dto::{CreateVehiculoRequest, UpdateVehiculoRequest, VehiculoResponse};
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::utils::validation::normalize_patente;
use crate::utils::errors::AppError;

pub struct VehiculoController {
    repository: VehiculoRepository,
}

impl VehiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehiculoRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<VehiculoResponse>, AppError> {
        let vehiculos = self.repository.list().await?;
        Ok(vehiculos.into_iter().map(VehiculoResponse::from).collect())
    }

    pub async fn create(&self, request: CreateVehiculoRequest) -> Result<i32, AppError> {
        if request.numero_interno.trim().is_empty() || request.patente.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Campos obligatorios faltantes".to_string(),
            ));
        }

        self.repository
            .create(
                request.numero_interno.trim(),
                &normalize_patente(&request.patente),
                request.kilometro.unwrap_or(0),
            )
            .await
    }

    pub async fn update(&self, id: i32, request: UpdateVehiculoRequest) -> Result<(), AppError> {
        if request.numero_interno.trim().is_empty() || request.patente.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Campos obligatorios faltantes".to_string(),
            ));
        }

        let updated = self
            .repository
            .update(
                id,
                request.numero_interno.trim(),
                &normalize_patente(&request.patente),
                request.kilometro.unwrap_or(0),
            )
            .await?;

        if updated == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let en_uso = self.repository.count_inspecciones(id).await?;
        if en_uso > 0 {
            return Err(AppError::BadRequest(
                "No se puede eliminar este vehículo porque está asociado a inspecciones."
                    .to_string(),
            ));
        }

        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
