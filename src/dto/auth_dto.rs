use serde::{Deserialize, Serialize};

use crate::models::usuario::Usuario;

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// Usuario autenticado que se devuelve junto con el token
#[derive(Debug, Serialize)]
pub struct UsuarioSesion {
    pub id: i32,
    pub username: String,
    pub nombre: String,
    pub correo: String,
    pub rol: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UsuarioSesion,
}

impl From<&Usuario> for UsuarioSesion {
    fn from(u: &Usuario) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            nombre: u.nombre.clone(),
            correo: u.correo.clone(),
            rol: u.rol.clone(),
        }
    }
}
