//! Middleware de autenticación JWT
//!
//! Valida el token Bearer, verifica que el usuario siga activo y deja
//! un `AuthenticatedUser` tipado en las extensions del request. La
//! identidad se propaga siempre como valor explícito, nunca como estado
//! global.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    config::environment::EnvironmentConfig,
    models::usuario::{Rol, Usuario},
    state::AppState,
    utils::errors::AppError,
};

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// id de usuario
    pub sub: String,
    pub username: String,
    pub nombre: String,
    pub rol: String,
    pub exp: usize,
    pub iat: usize,
}

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
    pub nombre: String,
    pub rol: Rol,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("No autorizado. Token no enviado.".to_string()))?;

    let claims = decode_token(token, &state.config)?;

    let user_id: i32 = claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized("Token inválido: datos incompletos.".to_string()))?;

    // Verificar que el usuario exista y siga activo
    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT * FROM usuarios WHERE id = $1 AND activo = 1",
    )
    .bind(user_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::Unauthorized("Usuario inactivo o inexistente.".to_string()))?;

    let authenticated_user = AuthenticatedUser {
        id: usuario.id,
        username: usuario.username,
        nombre: usuario.nombre,
        rol: Rol::parse(&usuario.rol),
    };

    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Decodificar y validar un token JWT
pub fn decode_token(token: &str, config: &EnvironmentConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        if matches!(
            e.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ) {
            AppError::Unauthorized("Token expirado.".to_string())
        } else {
            AppError::Unauthorized("Token inválido o manipulado.".to_string())
        }
    })
}

/// Generar un token JWT para un usuario
pub fn generate_jwt_token(usuario: &Usuario, config: &EnvironmentConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.jwt_expiration as i64);

    let claims = Claims {
        sub: usuario.id.to_string(),
        username: usuario.username.clone(),
        nombre: usuario.nombre.clone(),
        rol: usuario.rol.clone(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Error generando JWT: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 0,
            host: "localhost".to_string(),
            jwt_secret: "secreto-de-prueba".to_string(),
            jwt_expiration: 3600,
            cors_origins: vec![],
            logo_path: None,
        }
    }

    fn test_usuario() -> Usuario {
        Usuario {
            id: 5,
            username: "jperez".to_string(),
            nombre: "Juan Pérez".to_string(),
            correo: "".to_string(),
            rut: "12.345.678-9".to_string(),
            direccion: "".to_string(),
            telefono: "".to_string(),
            licencia: "B".to_string(),
            departamento: "Municipalidad".to_string(),
            rol: "Conductor".to_string(),
            password_hash: "x".to_string(),
            activo: 1,
        }
    }

    #[test]
    fn test_generate_and_decode_token() {
        let config = test_config();
        let token = generate_jwt_token(&test_usuario(), &config).unwrap();
        assert!(!token.is_empty());

        let claims = decode_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "5");
        assert_eq!(claims.username, "jperez");
        assert_eq!(claims.rol, "Conductor");
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let config = test_config();
        let token = generate_jwt_token(&test_usuario(), &config).unwrap();

        let mut other = test_config();
        other.jwt_secret = "otro-secreto".to_string();
        assert!(decode_token(&token, &other).is_err());
    }
}
