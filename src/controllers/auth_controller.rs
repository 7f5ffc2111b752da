//! Controlador de autenticación

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, UsuarioSesion};
use crate::middleware::auth::generate_jwt_token;
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::utils::errors::AppError;

pub struct AuthController {
    repository: UsuarioRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: UsuarioRepository::new(pool),
            config,
        }
    }

    /// Verificar credenciales y emitir un token de sesión.
    /// Usuario inexistente y contraseña incorrecta responden lo mismo.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        if request.username.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::BadRequest(
                "Usuario y contraseña son obligatorios".to_string(),
            ));
        }

        let usuario = self
            .repository
            .find_by_username(request.username.trim())
            .await?
            .filter(|u| u.activo == 1)
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = bcrypt::verify(&request.password, &usuario.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verificando credenciales: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_jwt_token(&usuario, &self.config)?;

        Ok(LoginResponse {
            token,
            user: UsuarioSesion::from(&usuario),
        })
    }
}
