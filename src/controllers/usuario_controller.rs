//! Controlador de usuarios

use sqlx::PgPool;
use validator::Validate;

use crate::dto::usuario_dto::{
    CreateUsuarioRequest, UpdatePasswordRequest, UpdateUsuarioRequest, UsuarioResponse,
};
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::utils::errors::AppError;

pub struct UsuarioController {
    repository: UsuarioRepository,
}

impl UsuarioController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UsuarioRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<UsuarioResponse>, AppError> {
        let usuarios = self.repository.list().await?;
        Ok(usuarios.into_iter().map(UsuarioResponse::from).collect())
    }

    pub async fn conductores(&self) -> Result<Vec<UsuarioResponse>, AppError> {
        let usuarios = self.repository.list_conductores().await?;
        Ok(usuarios.into_iter().map(UsuarioResponse::from).collect())
    }

    pub async fn create(&self, request: CreateUsuarioRequest) -> Result<i32, AppError> {
        request.validate()?;

        if self
            .repository
            .find_by_username(request.username.trim())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("El usuario ya existe".to_string()));
        }

        let hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error generando hash: {}", e)))?;

        self.repository
            .create(
                request.username.trim(),
                request.nombre.as_deref().unwrap_or(""),
                request.correo.as_deref().unwrap_or(""),
                request.rut.as_deref().unwrap_or(""),
                request.direccion.as_deref().unwrap_or(""),
                request.telefono.as_deref().unwrap_or(""),
                request.licencia.as_deref().unwrap_or(""),
                request.departamento.as_deref().unwrap_or("Municipalidad"),
                request.rol.as_deref().unwrap_or("Usuario"),
                &hash,
            )
            .await
    }

    pub async fn update(&self, id: i32, request: UpdateUsuarioRequest) -> Result<(), AppError> {
        let updated = self
            .repository
            .update(
                id,
                request.nombre.as_deref().unwrap_or(""),
                request.correo.as_deref().unwrap_or(""),
                request.rut.as_deref().unwrap_or(""),
                request.direccion.as_deref().unwrap_or(""),
                request.telefono.as_deref().unwrap_or(""),
                request.licencia.as_deref().unwrap_or(""),
                request.departamento.as_deref().unwrap_or("Municipalidad"),
                request.rol.as_deref().unwrap_or("Usuario"),
                if request.activo.unwrap_or(true) { 1 } else { 0 },
            )
            .await?;

        if updated == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(())
    }

    pub async fn update_password(
        &self,
        id: i32,
        request: UpdatePasswordRequest,
    ) -> Result<(), AppError> {
        request.validate()?;

        let hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error generando hash: {}", e)))?;

        let updated = self.repository.update_password(id, &hash).await?;
        if updated == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(())
    }
}
